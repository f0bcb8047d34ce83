// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a single path could not be turned into a metadata record.
///
/// `path` is always the path exactly as the caller supplied it.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("An error occurred for {path}: {source}")]
    Other {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractionError {
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path } | Self::Other { path, .. } => path,
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type ExtractionResult<T> = std::result::Result<T, ExtractionError>;

/// Failures of a CSV export call.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Refused before any file I/O.
    #[error("No metadata to export.")]
    EmptyBatch,

    /// Refused before any file I/O.
    #[error("record {row} has columns {found:?} but the header is {expected:?}")]
    ColumnMismatch {
        row: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Failed to read path list '{path}': {source}")]
    PathList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;
