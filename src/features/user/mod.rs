//! Profile, quota and API-key endpoints of the current user.

pub mod client;
pub mod types;
