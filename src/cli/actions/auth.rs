use crate::{
    cli::{
        actions::{print_json, Context},
        globals::GlobalArgs,
    },
    features::auth::client,
};
use anyhow::Result;
use secrecy::SecretString;
use serde_json::json;

#[derive(Debug)]
pub enum Command {
    Register {
        email: String,
        username: String,
        password: SecretString,
    },
    Login {
        email: String,
        password: SecretString,
    },
    Logout,
    Me,
    Refresh,
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Execute an auth action.
/// # Errors
/// Returns an error if the session file cannot be used or the API call fails.
pub async fn execute(args: Args) -> Result<()> {
    let ctx = Context::open(&args.globals)?;

    match args.command {
        Command::Register {
            email,
            username,
            password,
        } => {
            ctx.finish(client::register(
                &ctx.api,
                &ctx.session,
                &email,
                &username,
                &password,
            ))
            .await
        }
        Command::Login { email, password } => {
            ctx.finish(client::login(&ctx.api, &ctx.session, &email, &password))
                .await
        }
        Command::Logout => {
            let message = client::logout(&ctx.api, &ctx.session).await;
            ctx.persist()?;
            match message {
                Some(message) => print_json(&message),
                None => print_json(&json!({ "message": "Logged out locally" })),
            }
        }
        Command::Me => ctx.finish(client::me(&ctx.api)).await,
        Command::Refresh => ctx.finish(client::refresh(&ctx.api)).await,
    }
}
