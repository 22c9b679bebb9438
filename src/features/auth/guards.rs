//! Pre-navigation guard. It reads the route requirement and the session flag
//! and either lets the navigation through, redirects it, or verifies the
//! cookie session first. UX only: real access control lives on the API.
//!
//! Every verification failure (network, 401, 500, bad body, timeout,
//! cancellation) is handled the same way: redirect to login.

use crate::{
    client::{ApiClient, AppError},
    features::auth::{client, state::SessionContext, types::User},
    routes::{paths, Requirement, RouteDescriptor},
};
use std::{future::Future, time::Duration};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Default bound on the `/auth/me` round-trip made during navigation.
pub const DEFAULT_VERIFY_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of truth for "who is logged in", queried when the flag is missing.
pub trait SessionVerifier: Send + Sync {
    fn current_user(&self) -> impl Future<Output = Result<User, AppError>> + Send;
}

impl SessionVerifier for ApiClient {
    fn current_user(&self) -> impl Future<Output = Result<User, AppError>> + Send {
        client::me(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuardPolicy {
    pub verify_timeout: Duration,
    /// Re-check the server session before bouncing a cached user off a
    /// guest-only route. Off by default: a cached flag alone redirects.
    pub revalidate_guest_routes: bool,
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self {
            verify_timeout: DEFAULT_VERIFY_TIMEOUT,
            revalidate_guest_routes: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

#[derive(Debug)]
pub struct NavigationGuard<P> {
    verifier: P,
    session: SessionContext,
    policy: GuardPolicy,
}

impl<P: SessionVerifier> NavigationGuard<P> {
    pub fn new(verifier: P, session: SessionContext, policy: GuardPolicy) -> Self {
        Self {
            verifier,
            session,
            policy,
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    #[must_use]
    pub fn verifier(&self) -> &P {
        &self.verifier
    }

    /// Decides the fate of a navigation to `route` before it commits.
    pub async fn before_each(
        &self,
        route: &RouteDescriptor,
        cancel: &CancellationToken,
    ) -> Navigation {
        let authenticated = self.session.is_authenticated();
        debug!(to = route.path, authenticated, "guard evaluating navigation");

        match route.requirement {
            Requirement::Auth if !authenticated => match self.verify(cancel).await {
                Ok(user) => {
                    if let Err(err) = self.session.set_user(&user) {
                        warn!("failed to cache session flag: {err}");
                    }
                    Navigation::Proceed
                }
                Err(err) => {
                    debug!("session verification failed: {err}");
                    Navigation::Redirect(paths::LOGIN)
                }
            },
            Requirement::Guest if authenticated => {
                if !self.policy.revalidate_guest_routes {
                    return Navigation::Redirect(paths::DASHBOARD);
                }
                match self.verify(cancel).await {
                    Ok(user) => {
                        if let Err(err) = self.session.set_user(&user) {
                            warn!("failed to refresh session flag: {err}");
                        }
                        Navigation::Redirect(paths::DASHBOARD)
                    }
                    Err(err) => {
                        debug!("stale session flag dropped: {err}");
                        if let Err(err) = self.session.clear() {
                            warn!("failed to clear stale session flag: {err}");
                        }
                        Navigation::Proceed
                    }
                }
            }
            _ => Navigation::Proceed,
        }
    }

    async fn verify(&self, cancel: &CancellationToken) -> Result<User, AppError> {
        tokio::select! {
            () = cancel.cancelled() => {
                Err(AppError::Cancelled("Navigation cancelled.".to_string()))
            }
            result = tokio::time::timeout(self.policy.verify_timeout, self.verifier.current_user()) => {
                result.unwrap_or_else(|_| {
                    Err(AppError::Timeout("Session check timed out.".to_string()))
                })
            }
        }
    }
}
