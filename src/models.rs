//! Data models and structures
//!
//! Defines the upload configuration and the request/response models for the
//! GitHub Contents API.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Upload target configuration, read once at startup from a JSON file.
///
/// Example file content:
/// ```json
/// {
///     "repo": "owner/projectName",
///     "branch": "main",
///     "token": "access token",
///     "path": "image/2023"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub repo: String,
    pub branch: String,
    pub token: String,
    pub path: String,
}

impl Config {
    /// Default config location: `config.json` next to the executable.
    pub fn default_path() -> Result<PathBuf> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().ok_or_else(|| {
            Error::Config("cannot determine executable directory".to_string())
        })?;
        Ok(dir.join("config.json"))
    }

    /// Load the config from `path`, or from [`Config::default_path`] when
    /// no override is given. Field values are not validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        let raw = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("cannot parse {}: {}", path.display(), e)))
    }
}

// GitHub Contents API request/response models
// https://docs.github.com/en/rest/repos/contents?apiVersion=2022-11-28#create-or-update-file-contents

#[derive(Debug, Serialize)]
pub struct CreateFileRequest {
    pub message: String,
    pub content: String,
    pub branch: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateFileResponse {
    pub content: FileContent,
}

#[derive(Debug, Deserialize)]
pub struct FileContent {
    pub download_url: String,
}
