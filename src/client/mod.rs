//! Shared client utilities for API access, configuration and errors.
//!
//! Every request goes through [`ApiClient`], which owns the cookie jar so the
//! server's `HttpOnly` session cookies ride along on each call. Feature
//! clients (`features::*::client`) only name endpoints and payloads; request
//! setup, timeouts and error mapping live here so behavior stays consistent.
//! Callers must still avoid logging request bodies that carry credentials.

pub mod api;
pub mod config;
pub mod errors;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use errors::AppError;
