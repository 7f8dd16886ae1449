//! Ant-style pattern matching for file filtering.
//!
//! Patterns follow the Ant conventions:
//! - `*` matches any run of characters inside one path segment
//! - `**` matches zero or more whole segments
//! - `?` matches a single character other than `/`
//!
//! Every other character is literal, including `[`, `]`, `{`, `}` and `!`.
//!
//! Before compilation every pattern is normalized: `\` becomes `/`, a leading
//! `./` is dropped, and a trailing `/` is read as `/**` (so `build/` means
//! everything below `build`).
//!
//! ```
//! use file_list::discovery::GlobFilter;
//!
//! let filter = GlobFilter::with_patterns(
//!     vec!["**/*.txt".to_string()],
//!     vec!["sub/".to_string()],
//!     true,
//! )
//! .unwrap();
//!
//! assert!(filter.matches("a.txt"));
//! assert!(!filter.matches("sub/c.txt"));
//! assert!(!filter.matches("b.log"));
//! ```

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use super::ScanError;
use crate::types::ScanConfig;

/// SCM metadata and editor leftovers excluded when default excludes are enabled.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    // Miscellaneous typical temporary files
    "**/*~",
    "**/#*#",
    "**/.#*",
    "**/%*%",
    "**/._*",
    // CVS
    "**/CVS/**",
    "**/.cvsignore",
    // RCS
    "**/RCS/**",
    // SCCS
    "**/SCCS/**",
    // Visual SourceSafe
    "**/vssver.scc",
    // Subversion
    "**/.svn/**",
    // Arch
    "**/.arch-ids/**",
    // Bazaar
    "**/.bzr/**",
    // Mercurial
    "**/.hg/**",
    // Git
    "**/.git/**",
    "**/.gitignore",
    "**/.gitattributes",
    // BitKeeper
    "**/BitKeeper/**",
    "**/ChangeSet/**",
    // macOS
    "**/.DS_Store",
];

/// Normalize an Ant-style pattern into the form handed to the glob compiler.
pub fn normalize_pattern(pattern: &str) -> String {
    let mut normalized = escape_literals(&pattern.trim().replace('\\', "/"));

    while let Some(rest) = normalized.strip_prefix("./") {
        normalized = rest.to_string();
    }

    if normalized.ends_with('/') {
        normalized.push_str("**");
    }

    normalized
}

/// Escape glob syntax that has no meaning in Ant patterns.
///
/// `*` and `?` stay wildcards; `[`, `]`, `{`, `}` and `!` match themselves.
fn escape_literals(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    for ch in pattern.chars() {
        if matches!(ch, '[' | ']' | '{' | '}' | '!') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Include/exclude filter over `/`-separated relative paths.
#[derive(Debug, Clone)]
pub struct GlobFilter {
    /// Patterns for files to include (empty = include all).
    include: Vec<String>,
    /// Patterns for files to exclude.
    exclude: Vec<String>,
    include_set: Option<GlobSet>,
    exclude_set: Option<GlobSet>,
    case_sensitive: bool,
}

impl GlobFilter {
    /// Create a filter with no patterns (matches everything).
    pub fn new() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            include_set: None,
            exclude_set: None,
            case_sensitive: true,
        }
    }

    /// Create a filter with both include and exclude patterns.
    ///
    /// # Errors
    /// Returns [`ScanError::InvalidGlobPattern`] if any pattern does not compile.
    pub fn with_patterns(
        include: Vec<String>,
        exclude: Vec<String>,
        case_sensitive: bool,
    ) -> Result<Self, ScanError> {
        let include_set = compile(&include, case_sensitive)?;
        let exclude_set = compile(&exclude, case_sensitive)?;

        Ok(Self {
            include,
            exclude,
            include_set,
            exclude_set,
            case_sensitive,
        })
    }

    /// Build the filter described by a [`ScanConfig`], including the default
    /// exclude set when it is enabled.
    pub fn from_scan_config(config: &ScanConfig) -> Result<Self, ScanError> {
        let mut exclude = config.excludes.clone();
        if config.default_excludes {
            exclude.extend(DEFAULT_EXCLUDES.iter().map(|p| p.to_string()));
        }

        Self::with_patterns(config.includes.clone(), exclude, config.case_sensitive)
    }

    /// Check if a relative path passes the filter.
    ///
    /// A path passes when it matches at least one include pattern (or there
    /// are none) and matches no exclude pattern.
    pub fn matches(&self, path: &str) -> bool {
        let included = match &self.include_set {
            Some(set) => set.is_match(path),
            None => true,
        };

        let excluded = match &self.exclude_set {
            Some(set) => set.is_match(path),
            None => false,
        };

        included && !excluded
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    pub fn include_patterns(&self) -> &[String] {
        &self.include
    }

    pub fn exclude_patterns(&self) -> &[String] {
        &self.exclude
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl Default for GlobFilter {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(patterns: &[String], case_sensitive: bool) -> Result<Option<GlobSet>, ScanError> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(&normalize_pattern(pattern))
            .literal_separator(true)
            .backslash_escape(true)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|e| ScanError::invalid_pattern(pattern.as_str(), e))?;
        builder.add(glob);
    }

    builder
        .build()
        .map(Some)
        .map_err(|e| ScanError::invalid_pattern(patterns.join(", "), e))
}
