use crate::{
    cli::{
        actions::{print_json, Context},
        globals::GlobalArgs,
    },
    client::AppError,
    features::user::{
        client,
        types::{ApiKey, UpdateProfileRequest},
    },
};
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

#[derive(Debug)]
pub enum Command {
    Profile,
    Update(UpdateProfileRequest),
    ChangePassword {
        current: SecretString,
        new: SecretString,
    },
    Quota,
    ApiKey,
    RegenerateKey,
    DeleteAccount,
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Execute a user action.
/// # Errors
/// Returns an error if the session file cannot be used or the API call fails.
pub async fn execute(args: Args) -> Result<()> {
    let ctx = Context::open(&args.globals)?;

    match args.command {
        Command::Profile => ctx.finish(client::get_profile(&ctx.api)).await,
        Command::Update(request) => ctx.finish(client::update_profile(&ctx.api, &request)).await,
        Command::ChangePassword { current, new } => {
            ctx.finish(client::change_password(&ctx.api, &current, &new))
                .await
        }
        Command::Quota => ctx.finish(client::get_quota(&ctx.api)).await,
        Command::ApiKey => show_key(&ctx, client::get_api_key(&ctx.api).await),
        Command::RegenerateKey => show_key(&ctx, client::regenerate_api_key(&ctx.api).await),
        Command::DeleteAccount => {
            ctx.finish(client::delete_account(&ctx.api)).await?;
            // the account is gone, so is any cached user
            ctx.session.clear()?;
            Ok(())
        }
    }
}

/// The key is only exposed here, when the user explicitly asked to see it.
fn show_key(ctx: &Context, result: Result<ApiKey, AppError>) -> Result<()> {
    ctx.persist()?;
    let key = result?;
    print_json(&json!({
        "api_key": key.api_key.expose_secret(),
        "created_at": key.created_at,
    }))
}
