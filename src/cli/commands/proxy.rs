use crate::proxy::{rules::DEFAULT_PROXY_RULE, DEFAULT_PROXY_HOST};
use clap::{Arg, ArgAction, Command};

pub const ARG_HOST: &str = "host";
pub const ARG_PORT: &str = "port";
pub const ARG_RULE: &str = "rule";
pub const ARG_INSECURE: &str = "insecure";

#[must_use]
pub fn subcommand() -> Command {
    Command::new("proxy")
        .about("Serve the development proxy in front of the backend APIs")
        .arg(
            Arg::new(ARG_HOST)
                .long("host")
                .help("Address to listen on")
                .env("PANDORA_PROXY_HOST")
                .default_value(DEFAULT_PROXY_HOST),
        )
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .env("PANDORA_PROXY_PORT")
                .default_value("5173")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_RULE)
                .long("rule")
                .help("Forwarding rule <prefix>=<origin>; repeat or comma-separate for several")
                .env("PANDORA_PROXY_RULES")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .default_value(DEFAULT_PROXY_RULE),
        )
        .arg(
            Arg::new(ARG_INSECURE)
                .long("insecure")
                .help("Accept invalid TLS certificates from upstream origins")
                .action(ArgAction::SetTrue),
        )
}
