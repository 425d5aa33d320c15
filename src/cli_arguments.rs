use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transport {
    Reqwest,
    Hyper,
}

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub(crate) struct CliArguments {
    /// URL to request; an absent URL is reported like an empty field.
    #[arg(short, long)]
    pub url: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Transport::Reqwest)]
    pub transport: Transport,

    /// Transport-level timeout, in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use crate::cli_arguments::{CliArguments, Transport};

    #[test]
    fn test_cli_arguments_long_flags() {
        let args = CliArguments::parse_from([
            "status-probe",
            "--url",
            "http://localhost:9000",
            "--transport",
            "hyper",
            "--timeout-secs",
            "5",
        ]);

        assert_eq!(args.url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(args.transport, Transport::Hyper);
        assert_eq!(args.timeout_secs, 5);
    }

    #[test]
    fn test_cli_arguments_short_flags() {
        let args =
            CliArguments::parse_from(["status-probe", "-u", "https://example.com", "-t", "reqwest"]);

        assert_eq!(args.url.as_deref(), Some("https://example.com"));
        assert_eq!(args.transport, Transport::Reqwest);
    }

    #[test]
    fn test_cli_arguments_defaults() {
        let args = CliArguments::parse_from(["status-probe"]);

        assert_eq!(args.url, None);
        assert_eq!(args.transport, Transport::Reqwest);
        assert_eq!(args.timeout_secs, 30);
    }

    #[test]
    fn test_cli_arguments_reject_unknown_transport() {
        let result = CliArguments::try_parse_from(["status-probe", "-t", "curl"]);

        assert!(result.is_err());
    }
}
