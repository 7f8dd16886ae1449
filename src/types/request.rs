//! Immutable per-invocation requests: what to scan and where to write.

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Scan root used when nothing else is configured.
pub const DEFAULT_BASE_DIR: &str = "./target/";

/// Output destination used when nothing else is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "./target/file-list.json";

/// Pattern matching is case-sensitive on every host unless asked otherwise.
pub const DEFAULT_CASE_SENSITIVE: bool = true;

/// Package of the generated JUnit suite.
pub const DEFAULT_SUITE_PACKAGE: &str = "generated";

/// Class name of the generated JUnit suite.
pub const DEFAULT_SUITE_CLASS: &str = "AllTests";

/// What to scan and how to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Root of the scan. Reported paths are relative to it.
    pub base_dir: PathBuf,
    /// Ant-style include patterns (empty = include all).
    pub includes: Vec<String>,
    /// Ant-style exclude patterns.
    pub excludes: Vec<String>,
    /// Whether patterns match case-sensitively.
    pub case_sensitive: bool,
    /// Whether to follow symbolic links while walking.
    pub follow_symlinks: bool,
    /// Whether to append the SCM/editor default exclude set.
    pub default_excludes: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            includes: Vec::new(),
            excludes: Vec::new(),
            case_sensitive: DEFAULT_CASE_SENSITIVE,
            follow_symlinks: true,
            default_excludes: false,
        }
    }
}

impl ScanConfig {
    /// Create a ScanConfig rooted at `base_dir` with default matching options.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Default::default()
        }
    }

    /// Set include patterns.
    pub fn with_includes(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.includes = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Set exclude patterns.
    pub fn with_excludes(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excludes = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn with_default_excludes(mut self, enabled: bool) -> Self {
        self.default_excludes = enabled;
        self
    }
}

/// Package and class name of the generated JUnit suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteTemplate {
    pub package: String,
    pub class_name: String,
}

impl Default for SuiteTemplate {
    fn default() -> Self {
        Self {
            package: DEFAULT_SUITE_PACKAGE.to_string(),
            class_name: DEFAULT_SUITE_CLASS.to_string(),
        }
    }
}

impl SuiteTemplate {
    pub fn new(package: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class_name: class_name.into(),
        }
    }
}

/// Where the rendered list goes and in which format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRequest {
    /// Destination file. Created or truncated.
    pub output_path: PathBuf,
    /// Renderer to use.
    pub format: OutputFormat,
    /// Only used by [`OutputFormat::Junit`].
    pub suite: SuiteTemplate,
}

impl Default for OutputRequest {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            format: OutputFormat::default(),
            suite: SuiteTemplate::default(),
        }
    }
}

impl OutputRequest {
    pub fn new(output_path: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_path: output_path.into(),
            format,
            suite: SuiteTemplate::default(),
        }
    }

    pub fn with_suite(mut self, suite: SuiteTemplate) -> Self {
        self.suite = suite;
        self
    }
}
