// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use log::LevelFilter;

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "file_metadata",
    version = crate::VERSION,
    about = "Show file name, type, size and timestamps for the given paths, optionally exporting them to CSV",
    group(
        clap::ArgGroup::new("input_source")
            .args(["paths", "files_from"])
            .required(true)
            .multiple(true)
    )
)]
pub struct Args {
    /// Files (or directories) to inspect, processed in order
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Read additional paths from a file, one per line
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub files_from: Option<PathBuf>,

    /// Output format for the extracted metadata
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Do not print metadata on stdout
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,

    /// Export successful records to this CSV file (`.csv` is added when no extension is given)
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath, help_heading = "Export")]
    pub export: Option<PathBuf>,

    /// Exit with a failure status if any path could not be read
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,

    /// Append diagnostic log lines to this file instead of stderr
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath, help_heading = "Logging")]
    pub log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace); defaults to $FILE_METADATA_LOG or warn
    #[arg(long, value_name = "LEVEL", help_heading = "Logging")]
    pub log_level: Option<LevelFilter>,
}
