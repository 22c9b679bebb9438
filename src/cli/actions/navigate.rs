use crate::{
    cli::{
        actions::{print_json, Context},
        globals::GlobalArgs,
    },
    features::auth::GuardPolicy,
    routes::{Arrival, Router, RouterConfig},
};
use anyhow::{bail, Result};
use serde_json::json;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub path: String,
    pub history_base: String,
    pub revalidate_guest: bool,
}

/// Execute a guarded navigation. Ctrl-C while the session is being checked
/// cancels the check, which lands on the login route.
/// # Errors
/// Returns an error if the session file cannot be used, the path matches no
/// route or redirects never settle.
pub async fn execute(args: Args) -> Result<()> {
    let ctx = Context::open(&args.globals)?;
    let config = RouterConfig {
        history_base: args.history_base,
        policy: GuardPolicy {
            verify_timeout: args.globals.client.timeout,
            revalidate_guest_routes: args.revalidate_guest,
        },
    };
    let mut router = Router::new(ctx.api.clone(), ctx.session.clone(), config);

    let cancel = CancellationToken::new();
    let interrupt = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    let arrival = router.navigate_with(&args.path, &cancel).await;
    interrupt.abort();
    ctx.persist()?;

    match arrival? {
        Arrival::Entered { route, redirects } => print_json(&json!({
            "path": route.path,
            "name": route.name,
            "href": router.href(route.path),
            "redirects": redirects,
            "authenticated": ctx.session.is_authenticated(),
        })),
        Arrival::NotFound { path } => bail!("no route matches {path}"),
    }
}
