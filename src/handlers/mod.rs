//! CLI command handlers.
//!
//! This module contains the handler functions for CLI modes,
//! separated from main.rs to enable unit testing.

mod config;
mod list;

pub use config::handle_init_config;
pub use list::{list_files, run_list_mode};
