//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: reading metadata for a path
//! - [`export`]: persisting a batch of records
//!
//! These ports keep the use-case layer independent of the filesystem and
//! of the export format.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod export;
pub mod filesystem;
