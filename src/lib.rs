pub mod http_client;
pub mod request_dispatcher;
pub mod status_classifier;
