use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array of relative paths
    #[default]
    Json,
    /// Java source of a JUnit 4 suite referencing every listed class
    Junit,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Junit => "junit",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Parser, Debug, Default)]
#[command(
    name = "file-list",
    version,
    about = "List files matching Ant-style patterns as JSON or as a JUnit suite",
    long_about = "file-list scans a base directory with Ant-style include/exclude patterns and writes \
                  the matching relative paths either as a JSON array or as the Java source of a JUnit suite."
)]
pub struct Cli {
    /// Base directory of the scan [default: ./target/]
    #[arg(short, long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// File to write the rendered list to [default: ./target/file-list.json]
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Ant-style include pattern (repeatable). Without any, every file is included
    #[arg(short, long = "include", value_name = "PATTERN")]
    pub includes: Vec<String>,

    /// Ant-style exclude pattern (repeatable)
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub excludes: Vec<String>,

    /// Match patterns case-sensitively [default: true]
    #[arg(long, value_name = "BOOL")]
    pub case_sensitive: Option<bool>,

    /// Output type [default: json]
    #[arg(short = 't', long = "type", value_enum)]
    pub output_type: Option<OutputFormat>,

    /// Package of the generated JUnit suite [default: generated]
    #[arg(long, value_name = "PACKAGE")]
    pub suite_package: Option<String>,

    /// Class name of the generated JUnit suite [default: AllTests]
    #[arg(long, value_name = "NAME")]
    pub suite_class: Option<String>,

    /// Also exclude SCM metadata and editor backup files
    #[arg(long)]
    pub default_excludes: bool,

    /// Do not follow symbolic links while scanning
    #[arg(long)]
    pub no_follow_symlinks: bool,

    /// Configuration file (YAML, JSON or TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write a configuration template to .file-list.yaml and exit
    #[arg(long)]
    pub init: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
