//! The scan → render → write pipeline.

use tracing::info;

use crate::discovery;
use crate::error::Result;
use crate::output::{WriteReport, write_output};
use crate::reporter::reporter_for;
use crate::types::{OutputRequest, ScanConfig};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    /// Number of paths in the rendered list.
    pub file_count: usize,
    pub output: WriteReport,
}

/// Scan `scan.base_dir`, render the matches in the requested format and write
/// them to `request.output_path`.
///
/// The output file is not touched unless the scan succeeds.
pub fn render(scan: &ScanConfig, request: &OutputRequest) -> Result<RenderReport> {
    info!("Creating file list");
    info!(
        base_dir = %scan.base_dir.display(),
        output = %request.output_path.display(),
        includes = ?scan.includes,
        excludes = ?scan.excludes,
        case_sensitive = scan.case_sensitive,
        format = %request.format,
        "Configuration"
    );

    let files = discovery::scan(scan)?;
    info!(count = files.len(), "File list contains {} files", files.len());

    let contents = reporter_for(request).report(&files)?;
    let output = write_output(&request.output_path, &contents)?;

    Ok(RenderReport {
        file_count: files.len(),
        output,
    })
}
