//! Scan history endpoints: paging, statistics and deletion.

pub mod client;
pub mod types;
