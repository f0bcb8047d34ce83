// src/app.rs
use std::{
    io::{self, BufWriter, Write},
    path::Path,
    process::ExitCode,
};

use anyhow::{Context, Result};
use file_metadata_infra::{CsvExporter, FsMetadataExtractor};
use file_metadata_shared_kernel::ExportError;
use file_metadata_usecase::{Batch, ExportRecords, ExtractPaths};

use crate::{config::Config, presentation};

/// Extract every configured path, render the outcomes and export if asked.
///
/// # Errors
///
/// Returns `Err` only when stdout cannot be written. Extraction and export
/// failures are reported and folded into the returned exit code.
pub fn run(config: &Config) -> Result<ExitCode> {
    let extractor = FsMetadataExtractor::new();
    let batch = ExtractPaths::new(&extractor).run(&config.paths);

    if !config.quiet {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        presentation::render(&batch, config.format, &mut out).context("failed to emit output")?;
        out.flush().context("failed to emit output")?;
    }
    eprintln!("Loaded {} file(s)", batch.len());

    let mut ok = true;
    if let Some(destination) = &config.export {
        ok &= export(&batch, destination);
    }
    if config.strict && batch.failure_count() > 0 {
        log::debug!("strict mode: {} extraction failure(s)", batch.failure_count());
        ok = false;
    }

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// `false` when the export failed for a reason other than an empty batch.
fn export(batch: &Batch, destination: &Path) -> bool {
    let exporter = CsvExporter::new();
    match ExportRecords::new(&exporter).run(batch, destination) {
        Ok(written) => {
            log::info!("exported {written} record(s) to {}", destination.display());
            eprintln!("Metadata exported to {}", destination.display());
            true
        }
        Err(ExportError::EmptyBatch) => {
            log::warn!("{}", ExportError::EmptyBatch);
            eprintln!("{}", ExportError::EmptyBatch);
            true
        }
        Err(e) => {
            log::error!("Export error: {e}");
            eprintln!("Failed to export metadata: {e}");
            false
        }
    }
}
