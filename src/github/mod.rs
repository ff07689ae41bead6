//! GitHub Contents API integration
//!
//! Commits base64-encoded files to the configured repository and returns the
//! raw download URL GitHub reports for each created file.

pub mod client;
pub mod mock;

pub use client::GitHubClient;
pub use mock::MockUploadClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait UploadService: Send + Sync {
    /// Commit `content_b64` as `filename` and return its download URL.
    async fn upload_file(
        &self,
        message: &str,
        filename: &str,
        content_b64: &str,
    ) -> Result<String>;
}
