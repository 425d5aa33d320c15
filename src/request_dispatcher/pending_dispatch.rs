use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tokio::sync::oneshot;

use crate::{
    http_client::error::Error,
    request_dispatcher::{dispatch_error::DispatchError, http_response_status::HttpResponseStatus},
};

pub type DispatchOutcome = Result<HttpResponseStatus, DispatchError>;

/// Resolves once with the outcome of an in-flight request. If the request
/// task goes away without reporting, resolves with a cancelled transport error.
#[derive(Debug)]
pub struct PendingDispatch {
    receiver: oneshot::Receiver<DispatchOutcome>,
}

impl PendingDispatch {
    pub(crate) fn new(receiver: oneshot::Receiver<DispatchOutcome>) -> Self {
        Self { receiver }
    }
}

impl Future for PendingDispatch {
    type Output = DispatchOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| match received {
                Ok(outcome) => outcome,
                Err(_) => Err(DispatchError::Transport(Error::Cancelled)),
            })
    }
}
