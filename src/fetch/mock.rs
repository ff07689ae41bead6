use super::ContentSource;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory content source for tests: serves canned bytes per source string
/// and errors for anything unknown.
#[derive(Clone)]
pub struct MockContentSource {
    contents: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockContentSource {
    pub fn new() -> Self {
        Self {
            contents: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_content(self, source: &str, content: Vec<u8>) -> Self {
        self.contents
            .lock()
            .unwrap()
            .insert(source.to_string(), content);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockContentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentSource for MockContentSource {
    async fn fetch(&self, source: &str) -> Result<Vec<u8>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let contents = self.contents.lock().unwrap();
        match contents.get(source) {
            Some(content) => Ok(content.clone()),
            None => Err(Error::Download(source.to_string())),
        }
    }
}
