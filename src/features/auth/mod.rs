//! Auth feature module covering login/registration, cookie session hydration
//! and the navigation guard. The cached user record is a UX hint only; the
//! `HttpOnly` cookies set by the API are what actually authenticate requests.
//!
//! Flow Overview: login and register store the returned user as the session
//! flag. Guarded navigation calls `GET /auth/me` when the flag is missing.
//! Logout asks the server to drop its cookies and always clears the flag.

pub mod client;
pub mod guards;
pub mod state;
pub mod storage;
pub mod types;

pub use guards::{GuardPolicy, Navigation, NavigationGuard, SessionVerifier};
pub use state::SessionContext;
