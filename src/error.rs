// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResurrectError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Input too large to diff: {cells} table cells (limit: {limit})")]
    InputTooLarge { cells: usize, limit: usize },

    #[error("{0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ResurrectError>;

impl ResurrectError {
    /// Wraps an I/O error with the path that produced it.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting to ResurrectError::Io with unknown path.
impl From<std::io::Error> for ResurrectError {
    fn from(source: std::io::Error) -> Self {
        ResurrectError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for ResurrectError {
    fn from(e: walkdir::Error) -> Self {
        ResurrectError::Other(e.to_string())
    }
}
