//! Error types for file-list.
//!
//! Each layer owns its error enum; `FileListError` unifies them for the
//! pipeline and decides the process exit code.

use thiserror::Error;

use crate::config::ConfigError;
use crate::discovery::ScanError;
use crate::output::WriteError;
use crate::reporter::ReportError;

/// Exit code for invalid arguments or configuration.
pub const EXIT_CONFIG_ERROR: u8 = 2;
/// Exit code when the directory scan fails.
pub const EXIT_SCAN_ERROR: u8 = 3;
/// Exit code when the output cannot be rendered or written.
pub const EXIT_WRITE_ERROR: u8 = 4;

#[derive(Error, Debug)]
pub enum FileListError {
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("Could not render file list: {0}")]
    Report(#[from] ReportError),

    #[error("Could not write output file: {0}")]
    Write(#[from] WriteError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl FileListError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => EXIT_CONFIG_ERROR,
            Self::Scan(_) => EXIT_SCAN_ERROR,
            Self::Report(_) | Self::Write(_) => EXIT_WRITE_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, FileListError>;
