// crates/usecase/src/batch.rs
use std::path::{Path, PathBuf};

use file_metadata_shared_kernel::{Extraction, ExtractionFailure, MetadataRecord};

/// One selected path and what extracting it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub outcome: Extraction,
}

/// Ordered outcomes of one selection of paths.
///
/// The batch is owned by whoever drives extraction and export; it is never
/// shared behind the scenes. Failures stay in the batch so they can be shown,
/// but only successful records are offered for export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    entries: Vec<BatchEntry>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<PathBuf>, outcome: Extraction) {
        self.entries.push(BatchEntry { path: path.into(), outcome });
    }

    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &Extraction> {
        self.entries.iter().map(|entry| &entry.outcome)
    }

    pub fn records(&self) -> impl Iterator<Item = &MetadataRecord> {
        self.outcomes().filter_map(Extraction::as_record)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &ExtractionFailure)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.outcome.as_failure().map(|f| (entry.path.as_path(), f)))
    }

    /// Successful records in selection order, ready for export.
    pub fn export_candidates(&self) -> Vec<MetadataRecord> {
        self.records().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.records().count()
    }

    pub fn failure_count(&self) -> usize {
        self.len() - self.record_count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a BatchEntry;
    type IntoIter = std::slice::Iter<'a, BatchEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
