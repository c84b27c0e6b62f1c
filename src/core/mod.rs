//! Core data types for an in-memory VCF document.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Document`]: The root aggregate owning metadata, header, and records
//! - [`Header`]: Column names from the `#CHROM` line
//! - [`Metadata`], [`MetadataCategory`]: `##KEY=...` lines grouped by key
//! - [`Record`]: One variant line, stored positionally against the header
//! - [`FormatDeclaration`], [`SampleDeclaration`]: Builders for new metadata lines
//!
//! ## Column Layout
//!
//! | Position | Column | Required |
//! |----------|--------|----------|
//! | 1-8 | CHROM POS ID REF ALT QUAL FILTER INFO | Yes |
//! | 9 | FORMAT | Only when samples are present |
//! | 10.. | one column per sample | No |
//!
//! [`Document`]: document::Document
//! [`Header`]: header::Header
//! [`Metadata`]: metadata::Metadata
//! [`MetadataCategory`]: metadata::MetadataCategory
//! [`Record`]: record::Record
//! [`FormatDeclaration`]: types::FormatDeclaration
//! [`SampleDeclaration`]: types::SampleDeclaration

pub mod document;
pub mod header;
pub mod metadata;
pub mod record;
pub mod types;
