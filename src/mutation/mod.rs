//! Schema-extension operations on a [`Document`](crate::core::document::Document).
//!
//! - [`add_format_field`](crate::core::document::Document::add_format_field):
//!   declare a new FORMAT tag and append it to every record's FORMAT value
//! - [`add_sample`](crate::core::document::Document::add_sample):
//!   declare a new sample and add its column to the header and every record
//!
//! Both operations validate everything up front and only then modify the
//! document, so a returned error means nothing changed.

use serde::Serialize;
use thiserror::Error;

pub mod format;
pub mod sample;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("The FORMAT column is missing from the header; add a FORMAT field before adding samples")]
    MissingFormatColumn,

    #[error("Expected tag values for {expected} records, got {got}")]
    RecordCountMismatch { expected: usize, got: usize },

    #[error("Record {record_index} has {expected} FORMAT tags but the sample value has {found}")]
    TagCountMismatch {
        record_index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Sample value for record {record_index} contains a tab or line break")]
    InvalidSampleValue { record_index: usize },

    #[error("FORMAT tag '{0}' is already declared")]
    DuplicateFormatId(String),

    #[error("Column '{0}' already exists in the header")]
    DuplicateColumn(String),

    #[error("Invalid identifier '{id}': {reason}")]
    InvalidIdentifier { id: String, reason: &'static str },

    #[error("Declaration field '{field}' contains a line break")]
    InvalidDeclaration { field: &'static str },
}

/// Result of a successful FORMAT field addition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatFieldAdded {
    pub id: String,
    /// Whether the FORMAT column was created by this call
    pub created_format_column: bool,
    /// FORMAT tag count of each record after the change
    pub tag_counts: Vec<usize>,
    /// Number of existing sample values padded with the missing value
    pub padded_sample_values: usize,
}

impl FormatFieldAdded {
    /// The tag count shared by every record, if they all agree
    #[must_use]
    pub fn uniform_tag_count(&self) -> Option<usize> {
        let first = *self.tag_counts.first()?;
        self.tag_counts
            .iter()
            .all(|&n| n == first)
            .then_some(first)
    }
}

/// Result of a successful sample addition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleAdded {
    pub id: String,
    /// Whether placeholder values were generated because none were supplied
    pub defaults_substituted: bool,
}

/// Reject declaration fields that would split the metadata line
fn check_declaration_field(field: &'static str, value: &str) -> Result<(), MutationError> {
    if value.contains(['\n', '\r']) {
        return Err(MutationError::InvalidDeclaration { field });
    }
    Ok(())
}
