//! Scan error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of the directory scan. No partial file list is ever returned.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Base directory not found: {0}")]
    BaseDirNotFound(PathBuf),

    #[error("Base path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Cannot access base directory {path}: {source}")]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidGlobPattern { pattern: String, reason: String },

    #[error("Failed to scan {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl ScanError {
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidGlobPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }
}
