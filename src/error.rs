// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GradecovError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("no .gradecov directory found anywhere under {0}")]
    DataDirNotFound(PathBuf),

    #[error("history file does not exist at {0}")]
    HistoryNotFound(PathBuf),

    #[error("failed to decode {path} at line {line}: {source}")]
    HistoryDecode {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },

    #[error("failed to decode {path}: {source}")]
    ConfigDecode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to render report: {0}")]
    Render(serde_json::Error),

    #[error("file walk failed: {0}")]
    Walk(String),
}

pub type Result<T> = std::result::Result<T, GradecovError>;

impl GradecovError {
    /// Attaches the offending path to an I/O error.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        GradecovError::Io {
            source,
            path: path.into(),
        }
    }
}

// Allow `?` on std::io::Error by converting with an unknown path.
impl From<std::io::Error> for GradecovError {
    fn from(source: std::io::Error) -> Self {
        GradecovError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for GradecovError {
    fn from(e: walkdir::Error) -> Self {
        GradecovError::Walk(e.to_string())
    }
}
