use super::{RouteDescriptor, RouteKind, ROUTES};
use crate::features::auth::{
    guards::{GuardPolicy, Navigation, NavigationGuard, SessionVerifier},
    state::SessionContext,
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Mount point of the dashboard in the browser history.
pub const DEFAULT_HISTORY_BASE: &str = "/app/";
/// Redirects a single navigation may follow; one more is a loop.
pub const MAX_REDIRECTS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterConfig {
    pub history_base: String,
    pub policy: GuardPolicy,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history_base: DEFAULT_HISTORY_BASE.to_string(),
            policy: GuardPolicy::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("redirect loop navigating to {path}: gave up after {hops} redirects")]
    RedirectLoop { path: String, hops: usize },
}

/// Where a navigation ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Arrival {
    Entered {
        route: RouteDescriptor,
        /// Paths left behind by redirects, in order.
        redirects: Vec<String>,
    },
    NotFound {
        path: String,
    },
}

/// Serializes transitions: `navigate` takes `&mut self`, so one guard runs at a time.
#[derive(Debug)]
pub struct Router<P> {
    routes: Vec<RouteDescriptor>,
    history_base: String,
    guard: NavigationGuard<P>,
    current: Option<RouteDescriptor>,
}

impl<P: SessionVerifier> Router<P> {
    pub fn new(verifier: P, session: SessionContext, config: RouterConfig) -> Self {
        Self {
            routes: ROUTES.to_vec(),
            history_base: config.history_base,
            guard: NavigationGuard::new(verifier, session, config.policy),
            current: None,
        }
    }

    #[must_use]
    pub fn with_routes(mut self, routes: Vec<RouteDescriptor>) -> Self {
        self.routes = routes;
        self
    }

    #[must_use]
    pub fn session(&self) -> &SessionContext {
        self.guard.session()
    }

    #[must_use]
    pub fn verifier(&self) -> &P {
        self.guard.verifier()
    }

    #[must_use]
    pub fn current(&self) -> Option<&RouteDescriptor> {
        self.current.as_ref()
    }

    /// Route matching `location`, which may include the history base or a query.
    #[must_use]
    pub fn resolve(&self, location: &str) -> Option<&RouteDescriptor> {
        let path = normalize(&self.history_base, location);
        self.routes.iter().find(|route| route.path == path)
    }

    /// Browser-facing location of `path`, e.g. `/app/dashboard`.
    #[must_use]
    pub fn href(&self, path: &str) -> String {
        let base = self.history_base.trim_end_matches('/');
        let path = normalize("", path);
        if path == "/" {
            format!("{base}/")
        } else {
            format!("{base}{path}")
        }
    }

    /// # Errors
    /// Returns [`RouterError::RedirectLoop`] if redirects never settle.
    pub async fn navigate(&mut self, location: &str) -> Result<Arrival, RouterError> {
        self.navigate_with(location, &CancellationToken::new()).await
    }

    /// Like [`Router::navigate`], aborting any session check once `cancel` fires.
    ///
    /// # Errors
    /// Returns [`RouterError::RedirectLoop`] if redirects never settle.
    pub async fn navigate_with(
        &mut self,
        location: &str,
        cancel: &CancellationToken,
    ) -> Result<Arrival, RouterError> {
        let mut target = normalize(&self.history_base, location);
        let mut redirects = Vec::new();

        loop {
            let Some(route) = self.routes.iter().find(|r| r.path == target).copied() else {
                debug!(path = %target, "no route matched");
                return Ok(Arrival::NotFound { path: target });
            };

            let next = match route.kind {
                RouteKind::Redirect(to) => to,
                RouteKind::View(_) => match self.guard.before_each(&route, cancel).await {
                    Navigation::Proceed => {
                        debug!(path = %target, redirects = redirects.len(), "navigation committed");
                        self.current = Some(route);
                        return Ok(Arrival::Entered { route, redirects });
                    }
                    Navigation::Redirect(to) => to,
                },
            };

            if redirects.len() == MAX_REDIRECTS {
                return Err(RouterError::RedirectLoop {
                    path: normalize(&self.history_base, location),
                    hops: MAX_REDIRECTS,
                });
            }

            debug!(from = %target, to = next, "navigation redirected");
            redirects.push(std::mem::replace(&mut target, next.to_string()));
        }
    }
}

/// Strips the history base, query and fragment, and trailing slashes.
fn normalize(history_base: &str, location: &str) -> String {
    let location = location.trim();
    let end = location
        .find(|c| c == '?' || c == '#')
        .unwrap_or(location.len());
    let mut path = &location[..end];

    let base = history_base.trim().trim_end_matches('/');
    if !base.is_empty() {
        if path == base {
            path = "/";
        } else if let Some(rest) = path.strip_prefix(base) {
            if rest.starts_with('/') {
                path = rest;
            }
        }
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
