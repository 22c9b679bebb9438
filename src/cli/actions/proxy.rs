use crate::proxy::{serve, ProxyConfig};
use anyhow::Result;

pub type Args = ProxyConfig;

/// Execute the proxy action.
/// # Errors
/// Returns an error if the listener cannot bind or the server fails.
pub async fn execute(args: Args) -> Result<()> {
    serve(args).await
}
