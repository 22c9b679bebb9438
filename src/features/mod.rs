//! Resource groups of the dashboard API (auth, scan, history, user) and the
//! session logic built on top of them. Each group keeps its endpoint paths in
//! `client.rs` and its payloads in `types.rs`; the backend enforces every
//! authorization rule.

pub mod auth;
pub mod history;
pub mod scan;
pub mod user;
