//! Parser for VCF text into a [`Document`].
//!
//! A VCF file has three kinds of lines:
//!
//! - `##KEY=...` metadata lines, grouped by `KEY`
//! - one `#CHROM` header line naming the columns
//! - tab-separated record lines, one per variant
//!
//! Header and record lines are split on the tab character only, so field values
//! may contain spaces.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::document::Document;
use crate::core::header::{Header, HeaderError};
use crate::core::metadata::{Metadata, MetadataCategory};
use crate::core::record::Record;

const HEADER_PREFIX: &str = "#CHROM";
const METADATA_PREFIX: &str = "##";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No #CHROM header line found")]
    HeaderMissing,

    #[error("Invalid #CHROM header on line {line}: {source}")]
    InvalidHeader {
        line: usize,
        #[source]
        source: HeaderError,
    },

    #[error("Unknown metadata category '{key}' on line {line}")]
    UnknownMetadataCategory { key: String, line: usize },

    #[error("Malformed metadata on line {line}: expected ##KEY=VALUE")]
    MalformedMetadata { line: usize },

    #[error("Record on line {line} has {found} fields, header has {expected}")]
    RecordArityMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// How to treat `##KEY=` lines whose key is not a known VCF category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetadataPolicy {
    /// Keep unknown keys under [`MetadataCategory::Other`]
    #[default]
    Lenient,
    /// Fail with [`ParseError::UnknownMetadataCategory`]
    Strict,
}

/// Parser configuration
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    pub metadata_policy: MetadataPolicy,
}

impl ParserConfig {
    #[must_use]
    pub fn strict() -> Self {
        Self {
            metadata_policy: MetadataPolicy::Strict,
        }
    }
}

/// Parse a VCF file with the default configuration
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_vcf_file(path: &Path) -> Result<Document, ParseError> {
    parse_vcf_file_with(path, &ParserConfig::default())
}

/// Parse a VCF file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_vcf_file_with(path: &Path, config: &ParserConfig) -> Result<Document, ParseError> {
    debug!("Reading VCF from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_vcf_text_with(&content, config)
}

/// Parse VCF text with the default configuration
///
/// # Errors
///
/// See [`parse_vcf_text_with`].
pub fn parse_vcf_text(text: &str) -> Result<Document, ParseError> {
    parse_vcf_text_with(text, &ParserConfig::default())
}

/// Parse VCF text
///
/// # Errors
///
/// Returns `ParseError::HeaderMissing` if there is no `#CHROM` line,
/// `ParseError::InvalidHeader` if its columns are not a valid header,
/// `ParseError::UnknownMetadataCategory` for unknown keys under the strict policy,
/// `ParseError::MalformedMetadata` for `##` lines without `=`, or
/// `ParseError::RecordArityMismatch` if a record's field count differs from the header.
pub fn parse_vcf_text_with(text: &str, config: &ParserConfig) -> Result<Document, ParseError> {
    let header = extract_header(text)?;
    let metadata = extract_metadata(text, config.metadata_policy)?;
    let records = extract_records(text, &header)?;

    debug!(
        "Parsed {} metadata lines, {} columns, {} records",
        metadata.len(),
        header.len(),
        records.len()
    );

    Ok(Document::from_parts(metadata, header, records))
}

/// Find the first `#CHROM` line and split it into columns
fn extract_header(text: &str) -> Result<Header, ParseError> {
    let (index, line) = text
        .lines()
        .enumerate()
        .find(|(_, line)| line.starts_with(HEADER_PREFIX))
        .ok_or(ParseError::HeaderMissing)?;

    Header::from_line(line).map_err(|source| ParseError::InvalidHeader {
        line: index + 1,
        source,
    })
}

/// Group every `##KEY=` line under its category, in file order
fn extract_metadata(text: &str, policy: MetadataPolicy) -> Result<Metadata, ParseError> {
    let mut metadata = Metadata::new();

    for (index, line) in text.lines().enumerate() {
        let Some(body) = line.strip_prefix(METADATA_PREFIX) else {
            continue;
        };
        // Line numbers in errors are 1-based for user friendliness
        let line_num = index + 1;

        let (key, _) = body
            .split_once('=')
            .ok_or(ParseError::MalformedMetadata { line: line_num })?;

        let category = match MetadataCategory::from_known_key(key) {
            Some(category) => category,
            None if policy == MetadataPolicy::Strict => {
                return Err(ParseError::UnknownMetadataCategory {
                    key: key.to_string(),
                    line: line_num,
                });
            }
            None => {
                warn!("Keeping unknown metadata category '{key}' from line {line_num}");
                MetadataCategory::Other(key.to_string())
            }
        };

        metadata.push(category, line.trim());
    }

    Ok(metadata)
}

/// Split every non-comment, non-blank line into a record
fn extract_records(text: &str, header: &Header) -> Result<Vec<Record>, ParseError> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let values: Vec<String> = line.split('\t').map(str::to_string).collect();
        if values.len() != header.len() {
            return Err(ParseError::RecordArityMismatch {
                line: index + 1,
                expected: header.len(),
                found: values.len(),
            });
        }

        records.push(Record::new(values));
    }

    Ok(records)
}
