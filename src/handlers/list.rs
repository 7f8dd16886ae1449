//! List mode handler.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use tracing::{debug, error};

use crate::Cli;
use crate::config::{Config, EffectiveConfig};
use crate::error::Result;
use crate::run::{RenderReport, render};

/// Resolve configuration relative to `project_root` and run the pipeline.
pub fn list_files(cli: &Cli, project_root: &Path) -> Result<RenderReport> {
    let config = Config::resolve(cli.config.as_deref(), Some(project_root))?;
    let effective = EffectiveConfig::from_cli_and_config(cli, &config);
    debug!(?effective, "Effective configuration");

    render(&effective.scan, &effective.output)
}

/// Run normal list mode.
pub fn run_list_mode(cli: &Cli) -> ExitCode {
    match list_files(cli, Path::new(".")) {
        Ok(report) => {
            if let Err(e) = write_summary(&report, &mut io::stdout(), &mut io::stderr()) {
                debug!(error = %e, "Could not print summary");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "File list failed");
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Print the result line, preceded by the close warning when there is one.
fn write_summary(
    report: &RenderReport,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    if let Some(ref warning) = report.output.close_warning {
        writeln!(err, "Warning: {}", warning)?;
    }
    writeln!(
        out,
        "Wrote {} file(s) to {}",
        report.file_count,
        report.output.path.display()
    )
}
