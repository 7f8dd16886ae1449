//! Configuration layer for file-list.
//!
//! ## Layers
//! - `types`: Configuration file structure
//! - `loading`: File discovery and parsing
//! - `template`: Commented template written by `--init`
//! - `effective`: CLI + config file merging into the immutable requests

mod effective;
mod error;
mod loading;
mod template;
mod types;

pub use effective::EffectiveConfig;
pub use error::ConfigError;
pub use loading::{CONFIG_FILE_NAMES, TEMPLATE_FILE_NAME};
pub use types::{Config, OutputSection, ScanSection};
