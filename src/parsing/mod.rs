//! Parsers that build a [`Document`](crate::core::document::Document) from VCF text.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vcf_edit::parsing::vcf::{parse_vcf_file_with, parse_vcf_text, ParserConfig};
//! use std::path::Path;
//!
//! // Parse from a file, rejecting unknown ##KEY= categories
//! let doc = parse_vcf_file_with(Path::new("calls.vcf"), &ParserConfig::strict()).unwrap();
//!
//! // Or parse from text
//! let text = "##fileformat=VCFv4.4\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";
//! let doc = parse_vcf_text(text).unwrap();
//! ```
//!
//! ## Recognized Metadata Keys
//!
//! | Key | Category |
//! |-----|----------|
//! | fileformat, fileDate, reference, phasing | File-level |
//! | INFO, FILTER, FORMAT, ALT | Field declarations |
//! | assembly, contig | Reference |
//! | SAMPLE, PEDIGREE | Samples |
//!
//! Any other key is kept as an extension category unless the parser runs with
//! [`MetadataPolicy::Strict`](vcf::MetadataPolicy::Strict).

pub mod vcf;
