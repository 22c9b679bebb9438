use crate::routes::DEFAULT_HISTORY_BASE;
use clap::{Arg, ArgAction, Command};

pub const ARG_PATH: &str = "path";
pub const ARG_HISTORY_BASE: &str = "history-base";
pub const ARG_REVALIDATE_GUEST: &str = "revalidate-guest";

#[must_use]
pub fn subcommand() -> Command {
    Command::new("navigate")
        .about("Run guarded navigation to a dashboard route and print where it lands")
        .arg(
            Arg::new(ARG_PATH)
                .help("Route path or browser location, e.g. /dashboard or /app/history?page=2")
                .required(true),
        )
        .arg(
            Arg::new(ARG_HISTORY_BASE)
                .long("history-base")
                .help("Mount point of the dashboard in browser history")
                .env("PANDORA_HISTORY_BASE")
                .default_value(DEFAULT_HISTORY_BASE),
        )
        .arg(
            Arg::new(ARG_REVALIDATE_GUEST)
                .long("revalidate-guest")
                .help("Check the server session before redirecting a cached user away from login/register")
                .env("PANDORA_REVALIDATE_GUEST")
                .action(ArgAction::SetTrue),
        )
}
