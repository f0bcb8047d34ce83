// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        File::open(path).map(BufReader::new)
    }

    /// Read a newline separated path list, skipping blank lines.
    ///
    /// Trailing `\r` is stripped so lists written on Windows load unchanged.
    pub fn read_path_list(path: &Path) -> std::io::Result<Vec<PathBuf>> {
        let reader = Self::open_buffered(path)?;
        let mut paths = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let entry = line.trim_end_matches('\r');
            if !entry.trim().is_empty() {
                paths.push(PathBuf::from(entry));
            }
        }
        Ok(paths)
    }
}
