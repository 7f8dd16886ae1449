//! NewType wrappers for primitive types.

use serde::{Deserialize, Serialize};

/// Ordered list of `/`-separated paths relative to the scan root.
///
/// Order is whatever the scan produced and is kept as-is by every reporter.
/// Entries are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileList(Vec<String>);

impl FileList {
    /// Create a FileList from already relative paths.
    pub fn new(paths: Vec<String>) -> Self {
        Self(paths)
    }

    /// Append a path at the end of the list.
    pub fn push(&mut self, path: impl Into<String>) {
        self.0.push(path.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Get the paths as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume self and return the inner Vec.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for FileList {
    fn from(paths: Vec<String>) -> Self {
        Self(paths)
    }
}

impl From<&[&str]> for FileList {
    fn from(paths: &[&str]) -> Self {
        Self(paths.iter().map(|p| p.to_string()).collect())
    }
}

impl FromIterator<String> for FileList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for FileList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
