use crate::reporter::{ReportError, Reporter};
use crate::types::FileList;

/// Renders the list as a pretty-printed JSON array (two-space indentation).
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, files: &FileList) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(files)?)
    }
}
