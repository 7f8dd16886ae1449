pub mod json;
pub mod junit;

use crate::cli::OutputFormat;
use crate::types::{FileList, OutputRequest};
use thiserror::Error;

pub use json::JsonReporter;
pub use junit::{JunitSuiteReporter, LINE_ENDING, class_reference};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize file list: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait Reporter {
    fn report(&self, files: &FileList) -> Result<String, ReportError>;
}

/// Select the reporter for an output request.
pub fn reporter_for(request: &OutputRequest) -> Box<dyn Reporter> {
    match request.format {
        OutputFormat::Json => Box::new(JsonReporter::new()),
        OutputFormat::Junit => Box::new(JunitSuiteReporter::new(request.suite.clone())),
    }
}
