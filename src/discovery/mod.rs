//! Discovery layer for the file scan.
//!
//! This module handles:
//! - Ant-style include/exclude pattern matching
//! - Directory traversal producing `/`-separated relative paths

mod error;
pub mod patterns;
pub mod walker;

pub use error::ScanError;
pub use patterns::{DEFAULT_EXCLUDES, GlobFilter, normalize_pattern};
pub use walker::{DirectoryScanner, scan};
