//! Value types shared by the scanner, the reporters and the writer.
//!
//! Everything here is built once per invocation and never mutated after the
//! pipeline starts.

mod newtypes;
mod request;

pub use newtypes::FileList;
pub use request::{
    DEFAULT_BASE_DIR, DEFAULT_CASE_SENSITIVE, DEFAULT_OUTPUT_FILE, DEFAULT_SUITE_CLASS,
    DEFAULT_SUITE_PACKAGE, OutputRequest, ScanConfig, SuiteTemplate,
};
