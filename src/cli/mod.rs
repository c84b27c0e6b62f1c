//! Command-line interface for vcf-edit.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **view**: Summarize the header, samples, and metadata of a VCF file
//! - **add-format**: Declare a FORMAT tag and append it to every record
//! - **add-sample**: Declare a sample and add its genotype column
//!
//! ## Usage
//!
//! ```text
//! # Add a genotype tag to a sites-only VCF
//! vcf-edit add-format sites.vcf --id GT --number 1 --type String \
//!     --description Genotype -o genotyped.vcf
//!
//! # Add a sample with one value per record
//! vcf-edit add-sample genotyped.vcf --id S1 --tissue Blood --value 0/1 --value 1/1
//!
//! # JSON summary for scripting
//! vcf-edit view genotyped.vcf --format json
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::document::Document;
use crate::parsing::vcf::{MetadataPolicy, ParserConfig};
use crate::writing::vcf::VcfWriter;

pub mod add_format;
pub mod add_sample;
pub mod view;

#[derive(Parser)]
#[command(name = "vcf-edit")]
#[command(version)]
#[command(about = "Add FORMAT tags and sample columns to VCF files")]
#[command(
    long_about = "vcf-edit parses a VCF file, extends its genotype schema, and writes it back.\n\nEvery edit keeps the ##FORMAT/##SAMPLE metadata, the #CHROM header, and each record's FORMAT and sample fields consistent. A failed edit writes nothing, and output files are replaced atomically."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Fail on ##KEY= lines whose key is not a known VCF metadata category
    #[arg(long, global = true)]
    pub strict_metadata: bool,
}

impl Cli {
    #[must_use]
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            metadata_policy: if self.strict_metadata {
                MetadataPolicy::Strict
            } else {
                MetadataPolicy::Lenient
            },
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a VCF file
    View(view::ViewArgs),

    /// Add a FORMAT tag to every record
    AddFormat(add_format::AddFormatArgs),

    /// Add a sample column
    AddSample(add_sample::AddSampleArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Parse an input file, attaching the path to any error
fn load(path: &Path, config: &ParserConfig) -> anyhow::Result<Document> {
    Document::from_path_with(path, config)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {e}", path.display()))
}

/// Write a document to `output`, or back over `input` when no output is given
fn save(document: &Document, input: &Path, output: Option<&PathBuf>) -> anyhow::Result<PathBuf> {
    let destination = output.cloned().unwrap_or_else(|| input.to_path_buf());
    VcfWriter::new(&destination, document)
        .update()
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", destination.display()))?;
    Ok(destination)
}
