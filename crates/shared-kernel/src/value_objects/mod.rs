// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod file_meta;
pub mod timestamp;

pub use file_info::{FileExtension, FileName, FileSize};
pub use file_meta::{Extraction, ExtractionFailure, FieldRecord, MetadataRecord};
pub use timestamp::Timestamp;
