//! Application orchestration: fetch, name, and upload each input in order.

use crate::fetch::{self, ContentSource, FileFetcher};
use crate::github::{GitHubClient, UploadService};
use crate::models::Config;
use crate::sniff;
use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Local;
use tracing::{info, warn};

const COMMIT_MESSAGE: &str = "upload file";

/// Coordinates content fetching and GitHub uploads for one run.
pub struct App {
    fetcher: Box<dyn ContentSource>,
    uploader: Box<dyn UploadService>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_services(
            Box::new(FileFetcher::new()),
            Box::new(GitHubClient::new(config)),
        )
    }

    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests that need to inject
    /// mocks.
    pub fn with_services(
        fetcher: Box<dyn ContentSource>,
        uploader: Box<dyn UploadService>,
    ) -> Self {
        Self { fetcher, uploader }
    }

    /// Process every input in order, skipping failed ones, and return the
    /// download URLs of the uploads that succeeded.
    pub async fn run(&self, inputs: &[String]) -> Result<Vec<String>> {
        if inputs.is_empty() {
            return Err(Error::NoInput);
        }

        let mut uploaded = Vec::new();
        for input in inputs {
            let mut filename = base_name(input);

            let content = match self.fetcher.fetch(input).await {
                Ok(content) => content,
                Err(e) => {
                    warn!("Failed to get file {}: {}", input, e);
                    continue;
                }
            };

            if content.is_empty() {
                warn!("Empty content, skipping: {}", input);
                continue;
            }

            if !filename.contains('.') {
                filename.push_str(sniff::detect_extension(&content));
            }
            let filename = format!("{}{}", Local::now().format("%Y%m%d%H%M%S"), filename);

            let content_b64 = STANDARD.encode(&content);
            match self
                .uploader
                .upload_file(COMMIT_MESSAGE, &filename, &content_b64)
                .await
            {
                Ok(url) => {
                    info!("Uploaded {} as {}", input, filename);
                    uploaded.push(url);
                }
                Err(e) => {
                    warn!("Failed to upload {}: {}", input, e);
                }
            }
        }

        Ok(uploaded)
    }
}

/// Derive the remote base filename from an input path or URL.
///
/// URLs lose their query and fragment first; the filename becomes part of a
/// repository path, so `?v=1`-style suffixes must not leak into it.
fn base_name(source: &str) -> String {
    let path = if fetch::is_remote(source) {
        source
            .split(['?', '#'])
            .next()
            .unwrap_or(source)
    } else {
        source
    };

    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed).to_string()
}

/// Format the end-of-run summary printed to stdout.
pub fn format_summary(urls: &[String]) -> String {
    if urls.is_empty() {
        "none upload success".to_string()
    } else {
        format!("Upload Success:\n{}", urls.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MockContentSource;
    use crate::github::MockUploadClient;
    use pretty_assertions::assert_eq;

    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn timestamped(filename: &str) -> (&str, &str) {
        filename.split_at(14)
    }

    #[test]
    fn test_base_name_local_path() {
        assert_eq!(base_name("/tmp/photos/cat.png"), "cat.png");
        assert_eq!(base_name("cat.png"), "cat.png");
    }

    #[test]
    fn test_base_name_url_drops_query_and_fragment() {
        assert_eq!(base_name("https://example.com/a/b/cat.png?v=1"), "cat.png");
        assert_eq!(base_name("https://example.com/cat.png#frag"), "cat.png");
    }

    #[test]
    fn test_base_name_url_without_path() {
        assert_eq!(base_name("https://example.com"), "example.com");
    }

    #[test]
    fn test_format_summary() {
        assert_eq!(format_summary(&[]), "none upload success");
        assert_eq!(
            format_summary(&["https://a".to_string(), "https://b".to_string()]),
            "Upload Success:\nhttps://a\nhttps://b"
        );
    }

    #[tokio::test]
    async fn test_run_empty_input_is_fatal_without_network_calls() {
        let fetcher = MockContentSource::new();
        let uploader = MockUploadClient::new();
        let fetcher_probe = fetcher.clone();
        let uploader_probe = uploader.clone();

        let app = App::with_services(Box::new(fetcher), Box::new(uploader));
        let err = app.run(&[]).await.unwrap_err();

        assert!(matches!(err, Error::NoInput));
        assert_eq!(fetcher_probe.get_call_count(), 0);
        assert_eq!(uploader_probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_run_uploads_base64_of_fetched_bytes() {
        let fetcher = MockContentSource::new().with_content("cat.png", b"raw bytes".to_vec());
        let uploader = MockUploadClient::new();
        let uploader_probe = uploader.clone();

        let app = App::with_services(Box::new(fetcher), Box::new(uploader));
        let urls = app.run(&["cat.png".to_string()]).await.unwrap();
        assert_eq!(urls.len(), 1);

        let uploads = uploader_probe.get_uploads();
        assert_eq!(uploads.len(), 1);
        let decoded = STANDARD.decode(&uploads[0].1).unwrap();
        assert_eq!(decoded, b"raw bytes");
    }

    #[tokio::test]
    async fn test_run_prefixes_timestamp_and_keeps_extension() {
        let fetcher = MockContentSource::new().with_content("dir/cat.png", b"x".to_vec());
        let uploader = MockUploadClient::new();
        let uploader_probe = uploader.clone();

        let app = App::with_services(Box::new(fetcher), Box::new(uploader));
        app.run(&["dir/cat.png".to_string()]).await.unwrap();

        let uploads = uploader_probe.get_uploads();
        let (prefix, rest) = timestamped(&uploads[0].0);
        assert_eq!(prefix.len(), 14);
        assert!(prefix.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(rest, "cat.png");
    }

    #[tokio::test]
    async fn test_run_appends_sniffed_extension_when_name_has_none() {
        let fetcher = MockContentSource::new().with_content("snapshot", PNG_MAGIC.to_vec());
        let uploader = MockUploadClient::new();
        let uploader_probe = uploader.clone();

        let app = App::with_services(Box::new(fetcher), Box::new(uploader));
        app.run(&["snapshot".to_string()]).await.unwrap();

        let uploads = uploader_probe.get_uploads();
        let (_, rest) = timestamped(&uploads[0].0);
        assert_eq!(rest, "snapshot.png");
    }

    #[tokio::test]
    async fn test_run_unknown_content_keeps_bare_name() {
        let fetcher = MockContentSource::new().with_content("blob", vec![0x00, 0x01, 0x02, 0x03]);
        let uploader = MockUploadClient::new();
        let uploader_probe = uploader.clone();

        let app = App::with_services(Box::new(fetcher), Box::new(uploader));
        app.run(&["blob".to_string()]).await.unwrap();

        let uploads = uploader_probe.get_uploads();
        let (_, rest) = timestamped(&uploads[0].0);
        assert_eq!(rest, "blob");
    }

    #[tokio::test]
    async fn test_run_skips_failed_fetch_and_continues() {
        let fetcher = MockContentSource::new().with_content("ok.png", b"x".to_vec());
        let uploader = MockUploadClient::new().with_base_url("https://raw.test".to_string());

        let app = App::with_services(Box::new(fetcher), Box::new(uploader));
        let urls = app
            .run(&["missing.png".to_string(), "ok.png".to_string()])
            .await
            .unwrap();

        assert_eq!(urls.len(), 1);
        assert!(urls[0].starts_with("https://raw.test/"));
        assert!(urls[0].ends_with("ok.png"));
    }

    #[tokio::test]
    async fn test_run_skips_empty_content() {
        let fetcher = MockContentSource::new().with_content("empty.png", Vec::new());
        let uploader = MockUploadClient::new();
        let uploader_probe = uploader.clone();

        let app = App::with_services(Box::new(fetcher), Box::new(uploader));
        let urls = app.run(&["empty.png".to_string()]).await.unwrap();

        assert!(urls.is_empty());
        assert_eq!(uploader_probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_run_skips_failed_upload_and_continues() {
        let fetcher = MockContentSource::new()
            .with_content("a.png", b"a".to_vec())
            .with_content("b.png", b"b".to_vec());
        let uploader = MockUploadClient::new()
            .with_failure(true)
            .with_failure(false);
        let uploader_probe = uploader.clone();

        let app = App::with_services(Box::new(fetcher), Box::new(uploader));
        let urls = app
            .run(&["a.png".to_string(), "b.png".to_string()])
            .await
            .unwrap();

        assert_eq!(urls.len(), 1);
        assert_eq!(uploader_probe.get_call_count(), 2);
    }
}
