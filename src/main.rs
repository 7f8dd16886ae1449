use clap::Parser;
use file_list::{
    Cli,
    handlers::{handle_init_config, run_list_mode},
};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Handle config initialization
    if cli.init {
        return handle_init_config(cli.config.as_deref().unwrap_or(Path::new(".")));
    }

    run_list_mode(&cli)
}
