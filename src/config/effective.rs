//! Effective configuration after merging CLI and config file.

use std::path::PathBuf;

use super::types::Config;
use crate::cli::{Cli, OutputFormat};
use crate::types::{
    DEFAULT_BASE_DIR, DEFAULT_CASE_SENSITIVE, DEFAULT_OUTPUT_FILE, DEFAULT_SUITE_CLASS,
    DEFAULT_SUITE_PACKAGE, OutputRequest, ScanConfig, SuiteTemplate,
};

/// Immutable requests handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub scan: ScanConfig,
    pub output: OutputRequest,
}

impl EffectiveConfig {
    /// Merge CLI options with config file settings.
    ///
    /// - Values: CLI takes precedence, fallback to config, then built-in default
    /// - Pattern lists: a non-empty CLI list replaces the config list
    /// - Boolean flags: CLI OR config (either can enable)
    pub fn from_cli_and_config(cli: &Cli, config: &Config) -> Self {
        let base_dir = cli
            .base_dir
            .clone()
            .or_else(|| config.scan.base_dir.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR));

        let includes = if cli.includes.is_empty() {
            config.scan.includes.clone()
        } else {
            cli.includes.clone()
        };

        let excludes = if cli.excludes.is_empty() {
            config.scan.excludes.clone()
        } else {
            cli.excludes.clone()
        };

        let case_sensitive = cli
            .case_sensitive
            .or(config.scan.case_sensitive)
            .unwrap_or(DEFAULT_CASE_SENSITIVE);

        let follow_symlinks =
            !cli.no_follow_symlinks && config.scan.follow_symlinks.unwrap_or(true);

        let default_excludes = cli.default_excludes || config.scan.default_excludes;

        let output_path = cli
            .output_file
            .clone()
            .or_else(|| config.output.file.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

        let format = cli
            .output_type
            .or(config.output.output_type)
            .unwrap_or_default();

        let suite = SuiteTemplate::new(
            cli.suite_package
                .clone()
                .or_else(|| config.output.suite_package.clone())
                .unwrap_or_else(|| DEFAULT_SUITE_PACKAGE.to_string()),
            cli.suite_class
                .clone()
                .or_else(|| config.output.suite_class.clone())
                .unwrap_or_else(|| DEFAULT_SUITE_CLASS.to_string()),
        );

        Self {
            scan: ScanConfig {
                base_dir,
                includes,
                excludes,
                case_sensitive,
                follow_symlinks,
                default_excludes,
            },
            output: OutputRequest {
                output_path,
                format,
                suite,
            },
        }
    }
}
