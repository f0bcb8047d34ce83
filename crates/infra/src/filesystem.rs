// crates/infra/src/filesystem.rs
use std::{io, path::Path, time::SystemTime};

use file_metadata_ports::filesystem::MetadataExtractor;
use file_metadata_shared_kernel::{
    Extraction, ExtractionError, ExtractionResult, FileExtension, FileName, FileSize,
    MetadataRecord, Timestamp,
};

use crate::platform;

/// Extractor backed by `std::fs`.
///
/// Each call performs one canonicalization and one stat of the resolved
/// target; nothing is cached between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsMetadataExtractor;

impl FsMetadataExtractor {
    pub const fn new() -> Self {
        Self
    }

    /// Resolve `path` (following symlinks) and read its attributes.
    ///
    /// # Errors
    ///
    /// [`ExtractionError::NotFound`] when `path` does not resolve to an
    /// existing target, [`ExtractionError::Other`] for every other failure,
    /// including the target disappearing between resolution and stat.
    pub fn read(path: &Path) -> ExtractionResult<MetadataRecord> {
        let canonical = path.canonicalize().map_err(|err| resolution_error(path, err))?;
        let meta = std::fs::metadata(&canonical).map_err(|err| other_error(path, err))?;

        let name = FileName::from_path(&canonical);
        let file_type = FileExtension::from(&name);
        let created = platform::creation_time(&meta).map_err(|err| other_error(path, err))?;
        let modified = platform::modification_time(&meta).map_err(|err| other_error(path, err))?;
        let accessed = platform::access_time(&meta).map_err(|err| other_error(path, err))?;

        Ok(MetadataRecord {
            name,
            file_type,
            size: FileSize::new(meta.len()),
            created: timestamp(path, created)?,
            modified: timestamp(path, modified)?,
            accessed: timestamp(path, accessed)?,
        })
    }
}

impl MetadataExtractor for FsMetadataExtractor {
    fn extract(&self, path: &Path) -> Extraction {
        let result = Self::read(path);
        if let Err(err) = &result {
            log_failure(err);
        }
        result.into()
    }
}

fn resolution_error(path: &Path, err: io::Error) -> ExtractionError {
    if err.kind() == io::ErrorKind::NotFound {
        ExtractionError::NotFound { path: path.display().to_string() }
    } else {
        other_error(path, err)
    }
}

fn other_error(path: &Path, source: io::Error) -> ExtractionError {
    ExtractionError::Other { path: path.display().to_string(), source }
}

fn timestamp(path: &Path, time: SystemTime) -> ExtractionResult<Timestamp> {
    Timestamp::from_system_time(time).ok_or_else(|| {
        other_error(path, io::Error::new(io::ErrorKind::InvalidData, "timestamp out of range"))
    })
}

fn log_failure(err: &ExtractionError) {
    match err {
        ExtractionError::NotFound { path } => log::warn!("File not found: {path}"),
        ExtractionError::Other { path, source } => log::warn!("Error with {path}: {source}"),
    }
}
