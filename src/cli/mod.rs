mod args;
mod value_enum;

use std::path::Path;

pub use args::Args;
use clap::Parser;
use file_metadata_infra::persistence::FileReader;
use file_metadata_shared_kernel::{PresentationError, PresentationResult};
use log::LevelFilter;
pub use value_enum::CliOutputFormat;

use crate::{
    config::{Config, ConfigBuilder, with_default_extension},
    logging,
};

fn validate_export(export: Option<&Path>) -> PresentationResult<()> {
    let Some(path) = export else {
        return Ok(());
    };
    if path.as_os_str().is_empty() {
        return Err(invalid_export(path, "must not be empty"));
    }
    if path.is_dir() {
        return Err(invalid_export(path, "is a directory"));
    }
    Ok(())
}

fn invalid_export(path: &Path, reason: &str) -> PresentationError {
    PresentationError::InvalidValue {
        flag: "--export".to_string(),
        value: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Parse CLI arguments and materialise a [`Config`].
///
/// # Errors
///
/// Returns `Err` when the arguments are invalid or the `--files-from` list
/// cannot be read.
pub fn load_config() -> PresentationResult<Config> {
    let args = Args::parse();
    build_config(&args)
}

/// Convert parsed CLI arguments into a configuration.
///
/// Positional paths come first, followed by the entries of `--files-from`.
///
/// # Errors
///
/// Returns `Err` when `--export` is unusable or the path list cannot be read.
pub fn build_config(args: &Args) -> PresentationResult<Config> {
    validate_export(args.export.as_deref())?;

    let mut paths = args.paths.clone();
    if let Some(list) = &args.files_from {
        let listed = FileReader::read_path_list(list)
            .map_err(|source| PresentationError::PathList { path: list.clone(), source })?;
        paths.extend(listed);
    }

    let log_level = args
        .log_level
        .or_else(logging::level_from_env)
        .unwrap_or(LevelFilter::Warn);

    ConfigBuilder::default()
        .paths(paths)
        .export(args.export.as_deref().map(with_default_extension))
        .format(args.format)
        .strict(args.strict)
        .quiet(args.quiet)
        .log_file(args.log_file.clone())
        .log_level(log_level)
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
}
