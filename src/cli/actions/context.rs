use crate::{
    cli::globals::GlobalArgs,
    client::ApiClient,
    features::auth::{storage::FileStore, SessionContext},
};
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::{future::Future, sync::Arc};
use tracing::debug;

/// API client and session state for one CLI invocation.
pub(crate) struct Context {
    pub api: ApiClient,
    pub session: SessionContext,
}

impl Context {
    /// Opens the session file and replays its saved cookies into a new client.
    pub fn open(globals: &GlobalArgs) -> Result<Self> {
        let store = FileStore::open(globals.session_file.clone()).with_context(|| {
            format!(
                "failed to open session file {}",
                globals.session_file.display()
            )
        })?;
        let session = SessionContext::new(Arc::new(store));
        let api = ApiClient::with_cookies(&globals.client, session.cookies().as_deref())?;
        debug!(base_url = api.base_url(), "api client ready");
        Ok(Self { api, session })
    }

    /// Saves whatever cookies the server left in the jar.
    pub fn persist(&self) -> Result<()> {
        self.session
            .set_cookies(self.api.cookie_header().as_deref())
            .context("failed to save session cookies")
    }

    /// Awaits `call`, persists cookies whether or not it succeeded, then prints the result.
    pub async fn finish<T, E>(&self, call: impl Future<Output = Result<T, E>>) -> Result<()>
    where
        T: Serialize,
        E: Into<anyhow::Error>,
    {
        let result: Result<T> = call.await.map_err(Into::into);
        self.persist()?;
        print_json(&result?)
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
