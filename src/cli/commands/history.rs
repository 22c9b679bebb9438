use clap::{builder::PossibleValuesParser, Arg, ArgAction, Command};

pub const ARG_SKIP: &str = "skip";
pub const ARG_LIMIT: &str = "limit";
pub const ARG_SCAN_TYPE: &str = "scan-type";
pub const ARG_STATUS: &str = "status";
pub const ARG_SCAN_ID: &str = "scan-id";
pub const ARG_YES: &str = "yes";

#[must_use]
pub fn subcommand() -> Command {
    Command::new("history")
        .about("Browse and prune scan history")
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .about("List past scans, newest first")
                .arg(
                    Arg::new(ARG_SKIP)
                        .long("skip")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new(ARG_LIMIT)
                        .long("limit")
                        .value_parser(clap::value_parser!(u32).range(1..=100)),
                )
                .arg(
                    Arg::new(ARG_SCAN_TYPE)
                        .long("scan-type")
                        .value_parser(PossibleValuesParser::new(["ip", "hash"])),
                )
                .arg(Arg::new(ARG_STATUS).long("status").value_parser(
                    PossibleValuesParser::new(["pending", "processing", "completed", "failed"]),
                )),
        )
        .subcommand(Command::new("stats").about("Scan counts by type and verdict"))
        .subcommand(Command::new("dashboard").about("Dashboard summary statistics"))
        .subcommand(
            Command::new("delete").about("Delete one scan").arg(
                Arg::new(ARG_SCAN_ID)
                    .required(true)
                    .value_parser(clap::value_parser!(i64)),
            ),
        )
        .subcommand(
            Command::new("clear")
                .about("Delete every scan in the history")
                .arg(
                    Arg::new(ARG_YES)
                        .long("yes")
                        .help("Confirm the deletion")
                        .action(ArgAction::SetTrue),
                ),
        )
}
