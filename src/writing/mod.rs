//! Writers that render a document back to VCF text.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vcf_edit::Document;
//! use vcf_edit::writing::vcf::VcfWriter;
//!
//! let doc = Document::from_path("input.vcf").unwrap();
//! VcfWriter::new("output.vcf", &doc).update().unwrap();
//! ```

pub mod vcf;
