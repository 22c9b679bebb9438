use crate::cli::actions::{auth, history, navigate, proxy, scan, user, Action};
use anyhow::Result;

/// Execute the provided action.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Auth(args) => auth::execute(args).await,
        Action::Navigate(args) => navigate::execute(args).await,
        Action::Scan(args) => scan::execute(args).await,
        Action::History(args) => history::execute(args).await,
        Action::User(args) => user::execute(args).await,
        Action::Proxy(args) => proxy::execute(args).await,
    }
}
