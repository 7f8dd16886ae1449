//! Writing the rendered list to disk.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// Failure to persist the rendered output. Always fatal.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to create output file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to flush output file {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Create { path, .. } | Self::Write { path, .. } | Self::Flush { path, .. } => path,
        }
    }
}

/// Outcome of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub bytes_written: usize,
    /// Set when every byte was written but the final sync to disk failed.
    pub close_warning: Option<String>,
}

impl WriteReport {
    pub fn is_clean(&self) -> bool {
        self.close_warning.is_none()
    }
}

/// Create or truncate `path` and write `contents` into it.
///
/// The handle is dropped on every return path. Open, write and flush errors
/// abort with a [`WriteError`]; a failing sync after a complete write is
/// returned as [`WriteReport::close_warning`] and logged.
pub fn write_output(path: &Path, contents: &str) -> Result<WriteReport, WriteError> {
    let mut file = File::create(path).map_err(|e| WriteError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;

    file.write_all(contents.as_bytes())
        .map_err(|e| WriteError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    file.flush().map_err(|e| WriteError::Flush {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Devices and pipes reject fsync.
    let is_regular = file.metadata().map(|m| m.is_file()).unwrap_or(true);
    let close_warning = if is_regular {
        sync_warning(path, file.sync_all())
    } else {
        None
    };

    debug!(path = %path.display(), bytes = contents.len(), "Output written");

    Ok(WriteReport {
        path: path.to_path_buf(),
        bytes_written: contents.len(),
        close_warning,
    })
}

/// Turn the result of the final sync into a non-fatal warning.
fn sync_warning(path: &Path, result: std::io::Result<()>) -> Option<String> {
    match result {
        Ok(()) => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Output written but could not be synced to disk");
            Some(format!("Failed to sync {}: {}", path.display(), e))
        }
    }
}
