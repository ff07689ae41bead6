//! Content acquisition for upload inputs
//!
//! An input is either a local filesystem path or an `http(s)://` URL; both
//! resolve to the raw bytes that get committed upstream.

pub mod client;
pub mod mock;

pub use client::FileFetcher;
pub use mock::MockContentSource;

use crate::Result;
use async_trait::async_trait;

/// Returns true when `source` should be fetched over HTTP rather than read
/// from disk.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, source: &str) -> Result<Vec<u8>>;
}
