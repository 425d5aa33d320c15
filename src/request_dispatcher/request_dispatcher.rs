use std::sync::Arc;

use tokio::{runtime::Handle, sync::oneshot};
use tracing::{debug, error, info, warn};
use url::Url;

use crate::{
    http_client::{http_client::HttpClient, request::Request},
    request_dispatcher::{
        dispatch_error::DispatchError,
        http_response_status::HttpResponseStatus,
        local_file::read_local_file,
        pending_dispatch::{DispatchOutcome, PendingDispatch},
    },
};

const FILE_SCHEME: &str = "file";

/// Validates a URL, sends it through the injected transport and classifies
/// the answer. Holds no per-call state, so one instance can serve any number
/// of independent dispatches.
#[derive(Clone)]
pub struct RequestDispatcher {
    http_client: Arc<dyn HttpClient>,
}

impl RequestDispatcher {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self { http_client }
    }

    /// Accepts `file:` URLs and any URL with a non-empty host. Whether the
    /// scheme can actually be fetched is for the transport to report.
    pub fn validate(url_text: Option<&str>) -> Result<Url, DispatchError> {
        let url_text = match url_text {
            Some(text) if !text.is_empty() => text,
            _ => return Err(DispatchError::EmptyInput),
        };

        let url = Url::parse(url_text).map_err(|e| {
            debug!("Cannot parse URL {:?}: {}", url_text, e);
            DispatchError::InvalidUrl(url_text.to_string())
        })?;

        let has_host = url.host_str().is_some_and(|host| !host.is_empty());

        if url.scheme() == FILE_SCHEME || has_host {
            Ok(url)
        } else {
            Err(DispatchError::InvalidUrl(url_text.to_string()))
        }
    }

    /// Validation happens before this returns; the request itself runs on a
    /// task on the current Tokio runtime and its outcome arrives through the
    /// returned future.
    pub fn dispatch(&self, url_text: Option<&str>) -> Result<PendingDispatch, DispatchError> {
        let url = Self::validate(url_text).inspect_err(|e| warn!("Rejected dispatch: {}", e))?;

        let runtime = Handle::try_current().map_err(|e| {
            error!("Cannot dispatch {}: {}", url, e);
            DispatchError::NoRuntime(e.to_string())
        })?;

        let (sender, receiver) = oneshot::channel();
        let http_client = Arc::clone(&self.http_client);

        info!("Requesting {}", url);

        runtime.spawn(async move {
            let outcome = complete(http_client.as_ref(), url).await;

            if sender.send(outcome).is_err() {
                debug!("Dispatch outcome dropped, nobody is waiting for it");
            }
        });

        Ok(PendingDispatch::new(receiver))
    }

    pub async fn probe(&self, url_text: Option<&str>) -> DispatchOutcome {
        self.dispatch(url_text)?.await
    }
}

async fn complete(http_client: &dyn HttpClient, url: Url) -> DispatchOutcome {
    if url.scheme() == FILE_SCHEME {
        return match read_local_file(&url).await {
            Ok(content) => {
                info!("Read {} ({} bytes)", url, content.len());
                Ok(HttpResponseStatus::unclassified(!content.is_empty()))
            }
            Err(err) => {
                error!("Reading {} failed: {}", url, err);
                Err(DispatchError::Transport(err))
            }
        };
    }

    match http_client.execute(Request::get(url.clone())).await {
        Ok(response) => {
            let status = HttpResponseStatus::classified(response.status, !response.body.is_empty());

            info!(
                "{} answered {} ({}), body present: {}",
                url,
                response.status,
                status.category().map_or("-", |category| category.label()),
                status.has_body()
            );

            Ok(status)
        }
        Err(err) => {
            error!("Request to {} failed: {}", url, err);
            Err(DispatchError::Transport(err))
        }
    }
}
