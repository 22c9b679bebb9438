use clap::{Arg, Command};

pub const ARG_IP_ADDRESS: &str = "ip-address";
pub const ARG_FILE_HASH: &str = "file-hash";
pub const ARG_SCAN_ID: &str = "scan-id";

#[must_use]
pub fn subcommand() -> Command {
    Command::new("scan")
        .about("Submit IP or file hash scans")
        .subcommand_required(true)
        .subcommand(
            Command::new("ip")
                .about("Scan an IPv4 address")
                .arg(Arg::new(ARG_IP_ADDRESS).required(true)),
        )
        .subcommand(
            Command::new("hash")
                .about("Scan an MD5, SHA-1 or SHA-256 file hash")
                .arg(Arg::new(ARG_FILE_HASH).required(true)),
        )
        .subcommand(
            Command::new("get")
                .about("Fetch a scan by id")
                .arg(
                    Arg::new(ARG_SCAN_ID)
                        .required(true)
                        .value_parser(clap::value_parser!(i64)),
                ),
        )
}
