pub mod auth;
pub mod history;
pub mod navigate;
pub mod proxy;
pub mod scan;
pub mod user;

mod context;
mod run;

pub(crate) use context::{print_json, Context};

#[derive(Debug)]
pub enum Action {
    Auth(auth::Args),
    Navigate(navigate::Args),
    Scan(scan::Args),
    History(history::Args),
    User(user::Args),
    Proxy(proxy::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
