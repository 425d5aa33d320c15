use crate::http_client::error::Error;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("No URL was supplied")]
    EmptyInput,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Transport error: {0}")]
    Transport(#[from] Error),

    #[error("No async runtime to run the request on: {0}")]
    NoRuntime(String),
}

impl DispatchError {
    /// Validation failures are raised before any request is sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, DispatchError::EmptyInput | DispatchError::InvalidUrl(_))
    }
}
