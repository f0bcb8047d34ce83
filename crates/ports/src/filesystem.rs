// crates/ports/src/filesystem.rs
use std::path::Path;

use file_metadata_shared_kernel::Extraction;

/// Port for turning a user-supplied path into a metadata outcome.
///
/// Implementations must not mutate the filesystem and must return exactly
/// one outcome per call; per-path failures are values, not errors.
pub trait MetadataExtractor {
    fn extract(&self, path: &Path) -> Extraction;
}
