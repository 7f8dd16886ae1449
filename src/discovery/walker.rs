//! Directory walking that turns a base directory into a [`FileList`].

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use super::{GlobFilter, ScanError};
use crate::types::{FileList, ScanConfig};

/// Scan the directory described by `config`.
///
/// Convenience wrapper building a [`GlobFilter`] and a [`DirectoryScanner`]
/// from the same configuration.
pub fn scan(config: &ScanConfig) -> Result<FileList, ScanError> {
    let filter = GlobFilter::from_scan_config(config)?;
    DirectoryScanner::new(filter)
        .with_follow_symlinks(config.follow_symlinks)
        .scan(&config.base_dir)
}

/// Walks a directory tree and collects the relative paths of regular files
/// accepted by a [`GlobFilter`].
///
/// Traversal is depth-first and pre-order; entries of each directory are
/// visited in file-name order so the resulting list is stable across hosts.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    filter: GlobFilter,
    follow_symlinks: bool,
}

impl DirectoryScanner {
    pub fn new(filter: GlobFilter) -> Self {
        Self {
            filter,
            follow_symlinks: true,
        }
    }

    /// Set whether to follow symlinks. Links are skipped when not followed.
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Walk `base_dir` and return every matching file, relative to it.
    ///
    /// # Errors
    /// Fails if `base_dir` is missing, is not a directory, or any part of the
    /// tree cannot be read. Nothing is returned on failure.
    pub fn scan(&self, base_dir: &Path) -> Result<FileList, ScanError> {
        check_base_dir(base_dir)?;

        debug!(
            base_dir = %base_dir.display(),
            includes = ?self.filter.include_patterns(),
            excludes = ?self.filter.exclude_patterns(),
            "Scanning directory"
        );

        let walker = WalkDir::new(base_dir)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name();

        let mut files = FileList::default();
        for entry in walker {
            let entry = entry.map_err(|e| ScanError::Walk {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| base_dir.to_path_buf()),
                source: e,
            })?;

            if entry.depth() == 0 || !entry.file_type().is_file() {
                continue;
            }

            let Some(relative) = relative_slash_path(entry.path(), base_dir) else {
                warn!(path = %entry.path().display(), "Skipping entry outside base directory");
                continue;
            };

            if self.filter.matches(&relative) {
                trace!(path = %relative, "Included");
                files.push(relative);
            }
        }

        debug!(count = files.len(), "Scan finished");
        Ok(files)
    }
}

fn check_base_dir(base_dir: &Path) -> Result<(), ScanError> {
    match fs::metadata(base_dir) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(ScanError::NotADirectory(base_dir.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(ScanError::BaseDirNotFound(base_dir.to_path_buf()))
        }
        Err(e) => Err(ScanError::Access {
            path: base_dir.to_path_buf(),
            source: e,
        }),
    }
}

/// Express `path` relative to `base` with `/` separators on every host.
fn relative_slash_path(path: &Path, base: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let segments: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}
