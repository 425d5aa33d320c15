mod cli_arguments;
mod report;

use std::{process::ExitCode, sync::Arc, time::Duration};

use clap::Parser;
use http_status_probe::{
    http_client::{
        error::Error, http_client::HttpClient, hyper_http_client::HyperHttpClient,
        reqwest_http_client::ReqwestHttpClient,
    },
    request_dispatcher::request_dispatcher::RequestDispatcher,
};
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli_arguments::{CliArguments, Transport};

fn build_http_client(
    transport: Transport,
    timeout: Duration,
) -> Result<Arc<dyn HttpClient>, Error> {
    let http_client: Arc<dyn HttpClient> = match transport {
        Transport::Reqwest => Arc::new(ReqwestHttpClient::with_timeout(timeout)?),
        Transport::Hyper => Arc::new(HyperHttpClient::new(timeout)),
    };

    Ok(http_client)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: CliArguments = CliArguments::parse();

    info!("Using the {:?} transport", args.transport);

    let http_client = match build_http_client(args.transport, Duration::from_secs(args.timeout_secs)) {
        Ok(http_client) => http_client,
        Err(err) => {
            error!("Cannot build the HTTP client: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let dispatcher = RequestDispatcher::new(http_client);
    let outcome = dispatcher.probe(args.url.as_deref()).await;

    match &outcome {
        Err(err) if err.is_validation() => warn!("Input rejected: {}", err),
        Err(err) => error!("No response: {}", err),
        Ok(_) => {}
    }

    for line in report::render(&outcome) {
        println!("{}", line);
    }

    ExitCode::from(report::exit_code(&outcome))
}
