use super::UploadService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory upload target for tests: records every upload and hands back
/// `{base_url}/{filename}` URLs. Failures can be scripted per call.
#[derive(Clone)]
pub struct MockUploadClient {
    uploads: Arc<Mutex<Vec<(String, String)>>>,
    base_url: String,
    failures: Arc<Mutex<Vec<bool>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockUploadClient {
    pub fn new() -> Self {
        Self {
            uploads: Arc::new(Mutex::new(Vec::new())),
            base_url: "https://mock-github.example.com".to_string(),
            failures: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Script the outcome of the next calls in order: `true` fails that call.
    pub fn with_failure(self, fail: bool) -> Self {
        self.failures.lock().unwrap().push(fail);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Recorded `(filename, content_b64)` pairs, in upload order.
    pub fn get_uploads(&self) -> Vec<(String, String)> {
        self.uploads.lock().unwrap().clone()
    }
}

impl Default for MockUploadClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UploadService for MockUploadClient {
    async fn upload_file(
        &self,
        _message: &str,
        filename: &str,
        content_b64: &str,
    ) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let failures = self.failures.lock().unwrap();
        if failures.get(*count - 1).copied().unwrap_or(false) {
            return Err(Error::GitHub("unexpected status 422: scripted".to_string()));
        }

        self.uploads
            .lock()
            .unwrap()
            .push((filename.to_string(), content_b64.to_string()));
        Ok(format!("{}/{}", self.base_url, filename))
    }
}
