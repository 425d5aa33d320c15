use std::time::Duration;

use async_trait::async_trait;

use crate::http_client::{error::Error, request::Request, response::Response};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Performs a single request and reports the raw status and body.
/// Implementations never interpret the status code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: Request) -> Result<Response, Error>;
}
