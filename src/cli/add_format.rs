use std::path::PathBuf;

use clap::Args;

use crate::cli::{load, save, OutputFormat};
use crate::core::types::{FormatDeclaration, FormatNumber, FormatType};
use crate::parsing::vcf::ParserConfig;

#[derive(Args)]
pub struct AddFormatArgs {
    /// Input VCF file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (defaults to overwriting the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tag identifier, e.g. GT
    #[arg(long)]
    pub id: String,

    /// Number of values: an integer, A, R, G or .
    #[arg(long, default_value = "1")]
    pub number: FormatNumber,

    /// Value type: Integer, Float, Character or String
    #[arg(long = "type", default_value = "String")]
    pub ty: FormatType,

    /// Free-text description
    #[arg(long)]
    pub description: String,
}

/// Execute add-format subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed, the tag cannot be added,
/// or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AddFormatArgs, format: OutputFormat, config: &ParserConfig) -> anyhow::Result<()> {
    let mut document = load(&args.input, config)?;

    let declaration = FormatDeclaration::new(&args.id, args.number, args.ty, &args.description);
    let added = document.add_format_declaration(declaration)?;
    let destination = save(&document, &args.input, args.output.as_ref())?;

    match format {
        OutputFormat::Text => {
            println!("Added FORMAT tag {} to {}", added.id, destination.display());
            if added.created_format_column {
                println!("  Created FORMAT column");
            }
            match added.uniform_tag_count() {
                Some(n) => println!("  Tags per record: {n}"),
                None if added.tag_counts.is_empty() => println!("  No records"),
                None => println!("  Tags per record vary between records"),
            }
            if added.padded_sample_values > 0 {
                println!(
                    "  Padded {} existing sample values with '.'; check that sample values match the new tags",
                    added.padded_sample_values
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&added)?),
    }

    Ok(())
}
