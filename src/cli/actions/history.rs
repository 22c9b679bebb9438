use crate::{
    cli::{actions::Context, globals::GlobalArgs},
    features::history::{client, types::HistoryQuery},
};
use anyhow::Result;

#[derive(Debug)]
pub enum Command {
    List(HistoryQuery),
    Stats,
    Dashboard,
    Delete(i64),
    Clear,
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Execute a history action.
/// # Errors
/// Returns an error if the session file cannot be used or the API call fails.
pub async fn execute(args: Args) -> Result<()> {
    let ctx = Context::open(&args.globals)?;

    match args.command {
        Command::List(query) => ctx.finish(client::get_history(&ctx.api, &query)).await,
        Command::Stats => ctx.finish(client::get_scan_stats(&ctx.api)).await,
        Command::Dashboard => ctx.finish(client::get_stats(&ctx.api)).await,
        Command::Delete(scan_id) => ctx.finish(client::delete_scan(&ctx.api, scan_id)).await,
        Command::Clear => ctx.finish(client::clear_all(&ctx.api)).await,
    }
}
