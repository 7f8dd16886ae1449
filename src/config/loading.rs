//! Configuration loading functions.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::ConfigError;
use super::types::Config;

/// Project-level configuration files, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".file-list.yaml",
    ".file-list.yml",
    ".file-list.json",
    ".file-list.toml",
];

/// File written by `--init`.
pub const TEMPLATE_FILE_NAME: &str = ".file-list.yaml";

impl Config {
    /// Load configuration from a file. The format follows the extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.display().to_string(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseYaml {
                path: path.display().to_string(),
                source: e,
            }),
            "json" => serde_json::from_str(&content).map_err(|e| ConfigError::ParseJson {
                path: path.display().to_string(),
                source: e,
            }),
            "toml" => toml::from_str(&content).map_err(|e| ConfigError::ParseToml {
                path: path.display().to_string(),
                source: e,
            }),
            _ => Err(ConfigError::UnsupportedFormat(
                path.display().to_string(),
                ext,
            )),
        }
    }

    /// Load configuration from the project directory or global config.
    ///
    /// Search order:
    /// 1. `.file-list.yaml` / `.yml` / `.json` / `.toml` in project root
    /// 2. `~/.config/file-list/config.yaml`
    /// 3. Default configuration
    ///
    /// Files that fail to parse are skipped with a warning.
    pub fn load(project_root: Option<&Path>) -> Self {
        if let Some(root) = project_root {
            for filename in CONFIG_FILE_NAMES {
                let path = root.join(filename);
                if let Some(config) = Self::try_load(&path) {
                    return config;
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("file-list").join("config.yaml");
            if let Some(config) = Self::try_load(&global_config) {
                return config;
            }
        }

        Self::default()
    }

    /// Load the explicitly requested file, or fall back to [`Config::load`].
    ///
    /// Unlike auto-discovery, an explicit path that cannot be loaded is an error.
    pub fn resolve(
        explicit: Option<&Path>,
        project_root: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration");
                Self::from_file(path)
            }
            None => Ok(Self::load(project_root)),
        }
    }

    /// Write the configuration template, refusing to overwrite.
    ///
    /// A directory receives `.file-list.yaml`; any other path is written in
    /// the format its extension names.
    pub fn write_template(dir: &Path) -> Result<PathBuf, ConfigError> {
        let path = if dir.is_dir() {
            dir.join(TEMPLATE_FILE_NAME)
        } else {
            dir.to_path_buf()
        };

        if path.exists() {
            return Err(ConfigError::AlreadyExists(path));
        }

        let template = Self::template_for(&path)?;
        fs::write(&path, template).map_err(|e| ConfigError::WriteTemplate {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }

    fn try_load(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match Self::from_file(path) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded configuration");
                Some(config)
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable configuration file");
                None
            }
        }
    }
}
