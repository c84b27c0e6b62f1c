//! # vcf-edit
//!
//! A library for extending the genotype schema of VCF files.
//!
//! VCF files are often produced without per-sample genotype columns, or need a
//! new sample or FORMAT tag spliced in before downstream tools will accept them.
//! Doing this by hand means keeping three places consistent: the `##FORMAT` and
//! `##SAMPLE` metadata, the `#CHROM` header, and the FORMAT and sample fields of
//! every record.
//!
//! `vcf-edit` parses a VCF file into a [`Document`], applies schema-extension
//! operations that either commit a consistent state or change nothing, and
//! writes the result back atomically.
//!
//! ## Features
//!
//! - **Strict tab splitting**: Field values may contain spaces
//! - **Custom metadata**: Unknown `##KEY=` lines survive a round trip
//! - **Atomic mutations**: Failed operations leave the document untouched
//! - **Atomic writes**: The destination is replaced by rename, never truncated
//!
//! ## Example
//!
//! ```rust,no_run
//! use vcf_edit::{Document, FormatNumber, FormatType, SampleDeclaration};
//! use vcf_edit::writing::vcf::VcfWriter;
//!
//! let mut doc = Document::from_path("sites.vcf").unwrap();
//!
//! doc.add_format_field("GT", FormatNumber::Count(1), FormatType::String, "Genotype").unwrap();
//! doc.add_sample(
//!     SampleDeclaration::new("S1").with_tissue("Blood"),
//!     Some(vec!["0/1".to_string(), "1/1".to_string()]),
//! )
//! .unwrap();
//!
//! VcfWriter::new("genotyped.vcf", &doc).update().unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Document model (header, metadata, records, declarations)
//! - [`parsing`]: VCF text parser
//! - [`mutation`]: FORMAT tag and sample addition
//! - [`writing`]: VCF serializer and atomic file writer
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod mutation;
pub mod parsing;
pub mod utils;
pub mod writing;

// Re-export commonly used types for convenience
pub use crate::core::document::Document;
pub use crate::core::header::Header;
pub use crate::core::metadata::{Metadata, MetadataCategory};
pub use crate::core::record::Record;
pub use crate::core::types::*;
pub use mutation::{FormatFieldAdded, MutationError, SampleAdded};
pub use parsing::vcf::{MetadataPolicy, ParseError, ParserConfig};
pub use writing::vcf::{VcfWriter, WriteError};
