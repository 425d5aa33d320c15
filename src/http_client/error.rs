#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Cannot read local file: {0}")]
    File(String),

    #[error("Timeout")]
    Timeout,

    #[error("Request cancelled before a response was received")]
    Cancelled,
}

/// What a backend error says about the failed request. A request that could
/// not even be built (unsupported scheme, malformed URI) is an invalid
/// request; anything that went wrong on the wire is a network error.
#[cfg_attr(test, mockall::automock)]
pub trait HttpClientErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_builder(&self) -> bool;
    fn error_string(&self) -> String;
}

impl<T: HttpClientErrorChecker> From<T> for Error {
    fn from(err: T) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_builder() {
            Error::InvalidRequest(err.error_string())
        } else {
            Error::Network(err.error_string())
        }
    }
}
