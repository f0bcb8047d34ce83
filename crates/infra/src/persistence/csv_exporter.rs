// crates/infra/src/persistence/csv_exporter.rs
use std::{io::Write, path::Path};

use csv::{Terminator, WriterBuilder};
use file_metadata_ports::export::RecordExporter;
use file_metadata_shared_kernel::{ExportError, ExportResult, FieldRecord, MetadataRecord};

use super::FileWriter;

#[cfg(windows)]
const TERMINATOR: Terminator = Terminator::CRLF;
#[cfg(not(windows))]
const TERMINATOR: Terminator = Terminator::Any(b'\n');

/// Comma separated export with a header row taken from the first record.
///
/// Values are quoted only when they contain a delimiter, quote or line
/// break, so plain values stay readable and standard CSV readers recover
/// every value verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

impl CsvExporter {
    pub const fn new() -> Self {
        Self
    }

    /// Header of `records`, after checking that every record shares it.
    ///
    /// # Errors
    ///
    /// [`ExportError::EmptyBatch`] for an empty slice and
    /// [`ExportError::ColumnMismatch`] for the first record (by index) whose
    /// field names differ from the first record's.
    pub fn header<R: FieldRecord>(records: &[R]) -> ExportResult<Vec<String>> {
        let Some(first) = records.first() else {
            return Err(ExportError::EmptyBatch);
        };
        let expected: Vec<String> = first.field_names().into_iter().map(str::to_owned).collect();

        for (row, record) in records.iter().enumerate().skip(1) {
            let found = record.field_names();
            if !found.iter().copied().eq(expected.iter().map(String::as_str)) {
                return Err(ExportError::ColumnMismatch {
                    row,
                    expected,
                    found: found.into_iter().map(str::to_owned).collect(),
                });
            }
        }
        Ok(expected)
    }

    /// Validate `records` and write them to `destination`.
    ///
    /// Validation happens before the destination is opened, so a refused
    /// batch never creates or truncates a file. An I/O failure after that
    /// point may leave a partially written file behind.
    ///
    /// # Errors
    ///
    /// See [`CsvExporter::header`]; any write failure is [`ExportError::Io`].
    pub fn export_rows<R: FieldRecord>(records: &[R], destination: &Path) -> ExportResult<()> {
        let header = Self::header(records)?;
        let io_error = |source| ExportError::Io { path: destination.to_path_buf(), source };

        let file = FileWriter::create(destination).map_err(io_error)?;
        write_rows(&header, records, file).map_err(|err| io_error(err.into()))?;

        log::debug!("wrote {} record(s) to {}", records.len(), destination.display());
        Ok(())
    }
}

impl RecordExporter for CsvExporter {
    fn export(&self, records: &[MetadataRecord], destination: &Path) -> ExportResult<()> {
        Self::export_rows(records, destination)
    }
}

fn write_rows<R: FieldRecord, W: Write>(header: &[String], records: &[R], out: W) -> csv::Result<()> {
    let mut wtr = WriterBuilder::new().terminator(TERMINATOR).from_writer(out);
    wtr.write_record(header)?;
    for record in records {
        wtr.write_record(record.fields().into_iter().map(|(_, value)| value))?;
    }
    wtr.flush()?;
    Ok(())
}
