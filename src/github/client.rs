use super::UploadService;
use crate::models::{Config, CreateFileRequest, CreateFileResponse};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the create-or-update file contents endpoint.
/// https://docs.github.com/en/rest/repos/contents?apiVersion=2022-11-28#create-or-update-file-contents
pub struct GitHubClient {
    client: Client,
    repo: String,
    branch: String,
    token: String,
    path: String,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            repo: config.repo.clone(),
            branch: config.branch.clone(),
            token: config.token.clone(),
            path: config.path.clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn contents_url(&self, filename: &str) -> String {
        format!(
            "{}/repos/{}/contents/{}/{}",
            self.base_url,
            self.repo.trim_matches('/'),
            self.path.trim_matches('/'),
            filename
        )
    }
}

#[async_trait]
impl UploadService for GitHubClient {
    async fn upload_file(
        &self,
        message: &str,
        filename: &str,
        content_b64: &str,
    ) -> Result<String> {
        let request = CreateFileRequest {
            message: message.to_string(),
            content: content_b64.to_string(),
            branch: self.branch.clone(),
        };

        let response = self
            .client
            .put(self.contents_url(filename))
            .header("Accept", "application/vnd.github+json")
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to GitHub: {}", e);
                e
            })?;

        if response.status() != StatusCode::CREATED {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("GitHub API error (status {}): {}", status, error_text);
            return Err(Error::GitHub(format!(
                "unexpected status {}: {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        let parsed: CreateFileResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse GitHub response: {}\nBody: {}", e, body);
            Error::GitHub(format!("failed to parse response: {}", e))
        })?;

        Ok(parsed.content.download_url)
    }
}
