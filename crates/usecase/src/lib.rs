//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`batch`]: the ordered outcomes of one selection of paths
//! - [`orchestrator`]: extracting a selection and exporting its records
//!
//! Use cases depend on ports, never on concrete adapters.

#![allow(clippy::multiple_crate_versions)]

pub mod batch;
pub mod orchestrator;

pub use batch::{Batch, BatchEntry};
pub use orchestrator::{ExportRecords, ExtractPaths};
