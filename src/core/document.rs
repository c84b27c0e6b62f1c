use std::path::Path;

use serde::Serialize;

use crate::core::header::Header;
use crate::core::metadata::Metadata;
use crate::core::record::Record;
use crate::parsing::vcf::{parse_vcf_file, parse_vcf_file_with, ParseError, ParserConfig};

/// An in-memory VCF file: metadata, header, and records
///
/// The document only changes through [`Document::add_format_field`] and
/// [`Document::add_sample`], which either commit a fully consistent state or
/// leave the document untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub(crate) metadata: Metadata,
    pub(crate) header: Header,
    pub(crate) records: Vec<Record>,
}

impl Document {
    /// Assemble a document from parsed parts
    ///
    /// Callers inside the crate are responsible for record arity.
    pub(crate) fn from_parts(metadata: Metadata, header: Header, records: Vec<Record>) -> Self {
        debug_assert!(records.iter().all(|r| r.len() == header.len()));
        Self {
            metadata,
            header,
            records,
        }
    }

    /// Parse a VCF file with the default parser configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the file cannot be read or is malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        parse_vcf_file(path.as_ref())
    }

    /// Parse a VCF file with an explicit parser configuration
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the file cannot be read or is malformed.
    pub fn from_path_with(path: impl AsRef<Path>, config: &ParserConfig) -> Result<Self, ParseError> {
        parse_vcf_file_with(path.as_ref(), config)
    }

    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Sample identifiers, in column order
    #[must_use]
    pub fn samples(&self) -> &[String] {
        self.header.samples()
    }

    /// FORMAT value of a record, if the document has a FORMAT column
    #[must_use]
    pub fn format_of(&self, record_index: usize) -> Option<&str> {
        let column = self.header.format_index()?;
        self.records.get(record_index)?.value(column)
    }
}
