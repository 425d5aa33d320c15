use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::http_client::{
    error::{Error, HttpClientErrorChecker},
    http_client::{DEFAULT_TIMEOUT, HttpClient},
    request::Request,
    response::Response,
};

#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::from)?;

        Ok(Self { client })
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT).expect("Failed to build reqwest client")
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        debug!("Sending {} with reqwest", request);

        let reqwest_response = self
            .client
            .get(request.url)
            .send()
            .await
            .map_err(Error::from)?;

        let status = reqwest_response.status().as_u16();

        let body = reqwest_response
            .bytes()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Response { status, body })
    }
}

impl HttpClientErrorChecker for reqwest::Error {
    fn is_timeout(&self) -> bool {
        self.is_timeout()
    }

    fn is_builder(&self) -> bool {
        self.is_builder()
    }

    fn error_string(&self) -> String {
        self.to_string()
    }
}
