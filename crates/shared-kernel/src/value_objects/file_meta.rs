// crates/shared-kernel/src/value_objects/file_meta.rs
use serde::{Deserialize, Serialize};

use super::{FileExtension, FileName, FileSize, Timestamp};
use crate::error::ExtractionError;

/// A flat row of named text values, in column order.
///
/// Implemented by everything the presentation and export layers render, so
/// both can work from the field names rather than concrete types.
pub trait FieldRecord {
    fn fields(&self) -> Vec<(&str, String)>;

    fn field_names(&self) -> Vec<&str> {
        self.fields().into_iter().map(|(name, _)| name).collect()
    }
}

/// Descriptive attributes of one resolved path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    #[serde(rename = "File Name")]
    pub name: FileName,
    #[serde(rename = "File Type")]
    pub file_type: FileExtension,
    #[serde(rename = "File Size (bytes)")]
    pub size: FileSize,
    #[serde(rename = "Creation Time")]
    pub created: Timestamp,
    #[serde(rename = "Last Modified Time")]
    pub modified: Timestamp,
    #[serde(rename = "Last Accessed Time")]
    pub accessed: Timestamp,
}

impl MetadataRecord {
    /// Column names in output order. Must match the serde renames above.
    pub const COLUMNS: [&'static str; 6] = [
        "File Name",
        "File Type",
        "File Size (bytes)",
        "Creation Time",
        "Last Modified Time",
        "Last Accessed Time",
    ];
}

impl FieldRecord for MetadataRecord {
    fn fields(&self) -> Vec<(&str, String)> {
        let values = [
            self.name.to_string(),
            self.file_type.to_string(),
            self.size.to_string(),
            self.created.to_string(),
            self.modified.to_string(),
            self.accessed.to_string(),
        ];
        Self::COLUMNS.into_iter().zip(values).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionFailure {
    #[serde(rename = "Error")]
    pub message: String,
}

impl ExtractionFailure {
    pub const COLUMN: &'static str = "Error";

    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<&ExtractionError> for ExtractionFailure {
    fn from(err: &ExtractionError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<ExtractionError> for ExtractionFailure {
    fn from(err: ExtractionError) -> Self {
        Self::from(&err)
    }
}

impl FieldRecord for ExtractionFailure {
    fn fields(&self) -> Vec<(&str, String)> {
        vec![(Self::COLUMN, self.message.clone())]
    }
}

/// Outcome of one extraction attempt: exactly one of record or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extraction {
    Record(MetadataRecord),
    Failure(ExtractionFailure),
}

impl Extraction {
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    pub const fn as_record(&self) -> Option<&MetadataRecord> {
        match self {
            Self::Record(record) => Some(record),
            Self::Failure(_) => None,
        }
    }

    pub const fn as_failure(&self) -> Option<&ExtractionFailure> {
        match self {
            Self::Record(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

impl From<Result<MetadataRecord, ExtractionError>> for Extraction {
    fn from(result: Result<MetadataRecord, ExtractionError>) -> Self {
        match result {
            Ok(record) => Self::Record(record),
            Err(err) => Self::Failure(err.into()),
        }
    }
}

impl FieldRecord for Extraction {
    fn fields(&self) -> Vec<(&str, String)> {
        match self {
            Self::Record(record) => record.fields(),
            Self::Failure(failure) => failure.fields(),
        }
    }
}
