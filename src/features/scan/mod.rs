//! IP and file-hash scanning endpoints. Inputs are passed through untouched;
//! the API validates address and hash formats.

pub mod client;
pub mod types;
