pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod handlers;
pub mod output;
pub mod reporter;
pub mod run;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use cli::{Cli, OutputFormat};
pub use config::{Config, ConfigError, EffectiveConfig};
pub use discovery::{DirectoryScanner, GlobFilter, ScanError, scan};
pub use error::{FileListError, Result};
pub use output::{WriteError, WriteReport, write_output};
pub use reporter::{JsonReporter, JunitSuiteReporter, ReportError, Reporter, class_reference};
pub use run::{RenderReport, render};
pub use types::{FileList, OutputRequest, ScanConfig, SuiteTemplate};
