//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("download failed: {0}")]
    Download(String),

    #[error("GitHub API error: {0}")]
    GitHub(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("no input files given")]
    NoInput,
}

pub type Result<T> = std::result::Result<T, Error>;
