// src/config.rs
use std::path::{Path, PathBuf};

use derive_builder::Builder;
use log::LevelFilter;

/// How extraction outcomes are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `Field: value` block per path.
    #[default]
    Text,
    /// Records as a table, failures listed underneath.
    Table,
    /// A JSON array with one object per path.
    Json,
}

/// Extension appended to export destinations that have none.
pub const DEFAULT_EXPORT_EXTENSION: &str = "csv";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Paths to extract, in processing order.
    #[builder(default)]
    pub paths: Vec<PathBuf>,
    /// CSV destination; no export when `None`.
    #[builder(default)]
    pub export: Option<PathBuf>,
    #[builder(default)]
    pub format: OutputFormat,
    /// Fail the run when any path could not be extracted.
    #[builder(default)]
    pub strict: bool,
    /// Skip rendering outcomes on stdout.
    #[builder(default)]
    pub quiet: bool,
    /// Append log lines here instead of stderr.
    #[builder(default)]
    pub log_file: Option<PathBuf>,
    #[builder(default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: vec![],
            export: None,
            format: OutputFormat::default(),
            strict: false,
            quiet: false,
            log_file: None,
            log_level: LevelFilter::Warn,
        }
    }
}

/// `path` with `.csv` appended when it has no extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(DEFAULT_EXPORT_EXTENSION);
        PathBuf::from(name)
    }
}
