//! Route table of the dashboard and the router that walks it. Descriptors are
//! static; the only per-navigation state is the session flag read by the guard.

pub mod paths;
mod router;

pub use router::{Arrival, Router, RouterConfig, RouterError, DEFAULT_HISTORY_BASE, MAX_REDIRECTS};

/// What a route demands of the session before it can be entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Auth,
    Guest,
    None,
}

/// Screen rendered by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    Dashboard,
    Scanner,
    History,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    View(View),
    /// Static redirect, followed before any guard runs.
    Redirect(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub kind: RouteKind,
    pub requirement: Requirement,
}

impl RouteDescriptor {
    #[must_use]
    pub const fn view(
        path: &'static str,
        name: &'static str,
        view: View,
        requirement: Requirement,
    ) -> Self {
        Self {
            path,
            name: Some(name),
            kind: RouteKind::View(view),
            requirement,
        }
    }

    #[must_use]
    pub const fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            name: None,
            kind: RouteKind::Redirect(to),
            requirement: Requirement::None,
        }
    }
}

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::redirect(paths::ROOT, paths::LOGIN),
    RouteDescriptor::view(paths::LOGIN, "Login", View::Login, Requirement::Guest),
    RouteDescriptor::view(paths::REGISTER, "Register", View::Register, Requirement::Guest),
    RouteDescriptor::view(paths::DASHBOARD, "Dashboard", View::Dashboard, Requirement::Auth),
    RouteDescriptor::view(paths::SCANNER, "Scanner", View::Scanner, Requirement::Auth),
    RouteDescriptor::view(paths::HISTORY, "History", View::History, Requirement::Auth),
];
