// crates/ports/src/export.rs
use std::path::Path;

use file_metadata_shared_kernel::{ExportResult, MetadataRecord};

/// Port for writing a batch of records to `destination`.
///
/// An empty `records` slice must be refused with
/// [`ExportError::EmptyBatch`](file_metadata_shared_kernel::ExportError::EmptyBatch)
/// before the destination is touched.
pub trait RecordExporter {
    fn export(&self, records: &[MetadataRecord], destination: &Path) -> ExportResult<()>;
}
