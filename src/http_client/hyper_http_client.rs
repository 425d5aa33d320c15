use std::{error::Error as StdError, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper_tls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tracing::debug;

use crate::http_client::{
    error::{Error, HttpClientErrorChecker},
    http_client::{DEFAULT_TIMEOUT, HttpClient},
    request::Request,
    response::Response,
};

const SUPPORTED_SCHEMES: [&str; 2] = ["http", "https"];

/// Low-level backend on top of hyper, serving `http` and `https` through a
/// native-tls connector.
#[derive(Clone)]
pub struct HyperHttpClient {
    client: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    timeout: Duration,
}

impl HyperHttpClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder(TokioExecutor::new()).build(HttpsConnector::new()),
            timeout,
        }
    }
}

impl Default for HyperHttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl HttpClient for HyperHttpClient {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        debug!("Sending {} with hyper", request);

        // The connector would otherwise speak plain HTTP to any scheme.
        if !SUPPORTED_SCHEMES.contains(&request.url.scheme()) {
            return Err(Error::InvalidRequest(format!(
                "URL scheme is not allowed: {}",
                request.url.scheme()
            )));
        }

        let uri: hyper::Uri = request
            .url
            .as_str()
            .parse()
            .map_err(|e: http::uri::InvalidUri| Error::InvalidRequest(e.to_string()))?;

        let hyper_request = hyper::Request::builder()
            .method(hyper::Method::GET)
            .uri(uri)
            .body(Empty::<Bytes>::new())
            .map_err(|e| Error::InvalidRequest(e.to_string()))?;

        let exchange = async {
            let hyper_response = self
                .client
                .request(hyper_request)
                .await
                .map_err(Error::from)?;

            let status = hyper_response.status().as_u16();

            let body = hyper_response
                .into_body()
                .collect()
                .await
                .map_err(|e| Error::Network(e.to_string()))?
                .to_bytes();

            Ok::<_, Error>(Response { status, body })
        };

        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| Error::Timeout)?
    }
}

fn hyper_cause(err: &hyper_util::client::legacy::Error) -> Option<&hyper::Error> {
    let mut source = err.source();

    while let Some(cause) = source {
        if let Some(hyper_error) = cause.downcast_ref::<hyper::Error>() {
            return Some(hyper_error);
        }
        source = cause.source();
    }

    None
}

impl HttpClientErrorChecker for hyper_util::client::legacy::Error {
    fn is_timeout(&self) -> bool {
        hyper_cause(self).is_some_and(|cause| cause.is_timeout())
    }

    fn is_builder(&self) -> bool {
        !self.is_connect() && hyper_cause(self).is_some_and(|cause| cause.is_user())
    }

    fn error_string(&self) -> String {
        match self.source() {
            Some(cause) => format!("{}: {}", self, cause),
            None => self.to_string(),
        }
    }
}
