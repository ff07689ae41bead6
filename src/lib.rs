//! gitbed - uploads files and URLs to a GitHub repository via the Contents API
//!
//! Each input is fetched (from disk or over HTTP), base64-encoded, and
//! committed to the configured repository, yielding a raw download URL
//! suitable for hotlinking.

pub mod app;
pub mod error;
pub mod fetch;
pub mod github;
pub mod models;
pub mod sniff;

pub use error::{Error, Result};
