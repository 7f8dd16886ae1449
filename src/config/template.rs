//! Configuration template generation.

use std::path::Path;

use super::error::ConfigError;
use super::types::{Config, OutputSection, ScanSection};
use crate::cli::OutputFormat;
use crate::types::{
    DEFAULT_BASE_DIR, DEFAULT_CASE_SENSITIVE, DEFAULT_OUTPUT_FILE, DEFAULT_SUITE_CLASS,
    DEFAULT_SUITE_PACKAGE,
};

impl Config {
    /// Configuration with every setting spelled out at its default.
    pub fn template_values() -> Self {
        Self {
            scan: ScanSection {
                base_dir: Some(DEFAULT_BASE_DIR.to_string()),
                includes: Vec::new(),
                excludes: Vec::new(),
                case_sensitive: Some(DEFAULT_CASE_SENSITIVE),
                follow_symlinks: Some(true),
                default_excludes: false,
            },
            output: OutputSection {
                file: Some(DEFAULT_OUTPUT_FILE.to_string()),
                output_type: Some(OutputFormat::default()),
                suite_package: Some(DEFAULT_SUITE_PACKAGE.to_string()),
                suite_class: Some(DEFAULT_SUITE_CLASS.to_string()),
            },
        }
    }

    /// Template text for `path`, in the format its extension names.
    ///
    /// YAML keeps the explanatory comments; JSON and TOML carry the plain
    /// default values.
    pub fn template_for(path: &Path) -> Result<String, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let render_error = |reason: String| ConfigError::RenderTemplate {
            path: path.to_path_buf(),
            reason,
        };

        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::generate_template()),
            "json" => serde_json::to_string_pretty(&Self::template_values())
                .map(|json| json + "\n")
                .map_err(|e| render_error(e.to_string())),
            "toml" => toml::to_string_pretty(&Self::template_values())
                .map_err(|e| render_error(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(
                path.display().to_string(),
                ext,
            )),
        }
    }

    /// Generate a YAML configuration template with comments.
    pub fn generate_template() -> String {
        r#"# file-list Configuration File
# Place this file as .file-list.yaml in your project root.
# Command-line flags take precedence over the values below.

# =============================================================================
# SCAN CONFIGURATION
# =============================================================================
scan:
  # Base directory of the scan. Listed paths are relative to it.
  base_dir: ./target/

  # Ant-style include patterns. Without any, every file is included.
  #   *   matches within one path segment
  #   **  matches zero or more directories
  #   ?   matches a single character
  # includes:
  #   - "**/*.js"

  # Ant-style exclude patterns. A trailing "/" excludes a whole directory.
  # excludes:
  #   - "lib/"

  # Case sensitivity of pattern matching (same default on every OS)
  case_sensitive: true

  # Follow symbolic links while scanning
  follow_symlinks: true

  # Exclude SCM metadata (.git, .svn, ...) and editor backup files
  default_excludes: false

# =============================================================================
# OUTPUT CONFIGURATION
# =============================================================================
output:
  # File to write (created or overwritten)
  file: ./target/file-list.json

  # Output type: json, junit
  type: json

  # Package and class name of the generated JUnit suite (type: junit)
  # suite_package: generated
  # suite_class: AllTests
"#
        .to_string()
    }
}
