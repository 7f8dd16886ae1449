//! Configuration handlers.

use std::path::Path;
use std::process::ExitCode;

use crate::config::{Config, ConfigError};
use crate::error::EXIT_CONFIG_ERROR;

/// Handle --init command.
pub fn handle_init_config(path: &Path) -> ExitCode {
    match Config::write_template(path) {
        Ok(output_path) => {
            println!(
                "Created configuration file template at {}",
                output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(ConfigError::AlreadyExists(existing)) => {
            eprintln!(
                "Error: Configuration file already exists at {}",
                existing.display()
            );
            eprintln!("Remove it first or specify a different path.");
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}
