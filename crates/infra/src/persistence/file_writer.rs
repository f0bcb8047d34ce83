// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::File,
    io::BufWriter,
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create (or truncate) `path` and wrap it in a buffered writer.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }
}
