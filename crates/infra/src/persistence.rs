// crates/infra/src/persistence.rs
mod csv_exporter;
mod file_reader;
mod file_writer;

pub use csv_exporter::CsvExporter;
pub use file_reader::FileReader;
pub use file_writer::FileWriter;
