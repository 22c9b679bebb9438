//! # Pandora Web (Dashboard Client)
//!
//! `pandora-web` is the client side of the Pandora threat intelligence
//! dashboard. It maps the dashboard's REST API (authentication, IP/hash
//! scanning, scan history, user profile and quota) onto typed calls and runs
//! the same guarded navigation the browser application performs.
//!
//! ## Session Model
//!
//! The server's cookie session is authoritative. The client keeps a cached
//! user record (the *session flag*, stored under the `user` key) only to decide
//! navigation quickly; it is never proof of authentication. Every protected
//! operation is still enforced by the API.
//!
//! ## Navigation
//!
//! Routes carry a requirement (`auth`, `guest` or none). Before a route is
//! entered the [`features::auth::guards::NavigationGuard`] either lets the
//! navigation through, redirects it, or verifies the cookie session with
//! `GET /auth/me` first. That verification is bounded by a timeout and can be
//! cancelled.
//!
//! ## Development Proxy
//!
//! [`proxy`] forwards API prefixes to backend origins while the dashboard is
//! served locally.

pub mod cli;
pub mod client;
pub mod features;
pub mod proxy;
pub mod routes;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!("pandora", "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with("pandora/"));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
