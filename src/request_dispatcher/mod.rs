pub mod dispatch_error;
pub mod http_response_status;
mod local_file;
pub mod pending_dispatch;
pub mod request_dispatcher;
