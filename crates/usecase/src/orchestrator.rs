use std::path::Path;

use file_metadata_ports::{export::RecordExporter, filesystem::MetadataExtractor};
use file_metadata_shared_kernel::{ExportError, ExportResult};

use crate::batch::Batch;

/// Extracts every selected path, strictly in order, into a fresh [`Batch`].
pub struct ExtractPaths<'a> {
    extractor: &'a dyn MetadataExtractor,
}

impl<'a> ExtractPaths<'a> {
    pub fn new(extractor: &'a dyn MetadataExtractor) -> Self {
        Self { extractor }
    }

    pub fn run<I, P>(&self, paths: I) -> Batch
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut batch = Batch::new();
        for path in paths {
            let path = path.as_ref();
            batch.push(path, self.extractor.extract(path));
        }
        log::debug!(
            "extracted {} path(s): {} record(s), {} failure(s)",
            batch.len(),
            batch.record_count(),
            batch.failure_count()
        );
        batch
    }
}

/// Writes the successful records of a [`Batch`] through a [`RecordExporter`].
pub struct ExportRecords<'a> {
    exporter: &'a dyn RecordExporter,
}

impl<'a> ExportRecords<'a> {
    pub fn new(exporter: &'a dyn RecordExporter) -> Self {
        Self { exporter }
    }

    /// Export and return the number of records written.
    ///
    /// # Errors
    ///
    /// [`ExportError::EmptyBatch`] when the batch holds no successful record
    /// (the exporter is not invoked), otherwise whatever the exporter reports.
    pub fn run(&self, batch: &Batch, destination: &Path) -> ExportResult<usize> {
        let records = batch.export_candidates();
        if records.is_empty() {
            return Err(ExportError::EmptyBatch);
        }
        self.exporter.export(&records, destination)?;
        Ok(records.len())
    }
}
