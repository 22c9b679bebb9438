use crate::{
    cli::{actions::Context, globals::GlobalArgs},
    features::scan::client,
};
use anyhow::Result;

#[derive(Debug)]
pub enum Command {
    Ip(String),
    Hash(String),
    Get(i64),
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Execute a scan action.
/// # Errors
/// Returns an error if the session file cannot be used or the API call fails.
pub async fn execute(args: Args) -> Result<()> {
    let ctx = Context::open(&args.globals)?;

    match args.command {
        Command::Ip(ip_address) => ctx.finish(client::scan_ip(&ctx.api, &ip_address)).await,
        Command::Hash(file_hash) => ctx.finish(client::scan_hash(&ctx.api, &file_hash)).await,
        Command::Get(scan_id) => ctx.finish(client::get_scan(&ctx.api, scan_id)).await,
    }
}
