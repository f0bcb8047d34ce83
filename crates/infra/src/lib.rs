// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;
pub mod platform;

pub use filesystem::FsMetadataExtractor;
pub use persistence::CsvExporter;
