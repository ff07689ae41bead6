use super::{is_remote, ContentSource};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::fs;

/// Production fetcher: HTTP GET for URLs, direct disk read for paths.
///
/// The GET carries no explicit timeout and is not retried; a failed input is
/// reported to the caller and the run moves on.
pub struct FileFetcher {
    client: Client,
}

impl FileFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for FileFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentSource for FileFetcher {
    async fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        if is_remote(source) {
            let response = self.client.get(source).send().await.map_err(|e| {
                tracing::error!("Failed to send request to {}: {}", source, e);
                e
            })?;

            if response.status() != StatusCode::OK {
                return Err(Error::Download(source.to_string()));
            }

            Ok(response.bytes().await?.to_vec())
        } else {
            Ok(fs::read(source)?)
        }
    }
}
