//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Main configuration structure, mirroring the CLI options.
///
/// Every field is optional so that unset values fall through to the CLI
/// defaults during merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What to scan.
    pub scan: ScanSection,
    /// Where and how to write the list.
    pub output: OutputSection,
}

/// Scan options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSection {
    /// Base directory of the scan.
    pub base_dir: Option<String>,
    /// Ant-style include patterns.
    pub includes: Vec<String>,
    /// Ant-style exclude patterns.
    pub excludes: Vec<String>,
    /// Case sensitivity of pattern matching.
    pub case_sensitive: Option<bool>,
    /// Follow symbolic links while walking.
    pub follow_symlinks: Option<bool>,
    /// Exclude SCM metadata and editor backup files.
    pub default_excludes: bool,
}

/// Output options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Output file path.
    pub file: Option<String>,
    /// Output type: `json` or `junit`.
    #[serde(rename = "type")]
    pub output_type: Option<OutputFormat>,
    /// Package of the generated JUnit suite.
    pub suite_package: Option<String>,
    /// Class name of the generated JUnit suite.
    pub suite_class: Option<String>,
}
