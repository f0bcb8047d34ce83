// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ExportError, ExportResult, ExtractionError, ExtractionResult, PresentationError,
    PresentationResult,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{
    Extraction, ExtractionFailure, FieldRecord, FileExtension, FileName, FileSize, MetadataRecord,
    Timestamp,
};
