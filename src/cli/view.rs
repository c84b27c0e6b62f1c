use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::{load, OutputFormat};
use crate::core::document::Document;
use crate::parsing::vcf::ParserConfig;

#[derive(Args)]
pub struct ViewArgs {
    /// Input VCF file
    #[arg(required = true)]
    pub input: PathBuf,
}

#[derive(Serialize)]
struct Summary<'a> {
    columns: &'a [String],
    has_format: bool,
    samples: &'a [String],
    records: usize,
    format_ids: Vec<&'a str>,
    metadata: Vec<CategoryCount<'a>>,
}

#[derive(Serialize)]
struct CategoryCount<'a> {
    category: &'a str,
    known: bool,
    lines: usize,
}

impl<'a> Summary<'a> {
    fn new(document: &'a Document) -> Self {
        Self {
            columns: document.header().columns(),
            has_format: document.header().has_format(),
            samples: document.samples(),
            records: document.records().len(),
            format_ids: document.metadata().format_ids().collect(),
            metadata: document
                .metadata()
                .iter()
                .map(|(category, lines)| CategoryCount {
                    category: category.key(),
                    known: category.is_known(),
                    lines: lines.len(),
                })
                .collect(),
        }
    }
}

/// Execute view subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ViewArgs, format: OutputFormat, config: &ParserConfig) -> anyhow::Result<()> {
    let document = load(&args.input, config)?;
    let summary = Summary::new(&document);

    match format {
        OutputFormat::Text => print_text_summary(&args, &summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

fn print_text_summary(args: &ViewArgs, summary: &Summary<'_>) {
    println!("File: {}", args.input.display());
    println!("{}", "=".repeat(60));
    println!("Columns: {}", summary.columns.join(" "));
    println!("Records: {}", summary.records);

    if summary.has_format {
        println!("FORMAT tags declared: {}", summary.format_ids.join(", "));
        if summary.samples.is_empty() {
            println!("Samples: none");
        } else {
            println!("Samples ({}): {}", summary.samples.len(), summary.samples.join(", "));
        }
    } else {
        println!("No FORMAT column (sites-only file)");
    }

    println!("\nMetadata:");
    for entry in &summary.metadata {
        let marker = if entry.known { "" } else { " (custom)" };
        println!("  {:<12} {:>5}{marker}", entry.category, entry.lines);
    }
}
