use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::{load, save, OutputFormat};
use crate::core::types::{SampleDeclaration, NOT_AVAILABLE};
use crate::parsing::vcf::ParserConfig;

#[derive(Args)]
pub struct AddSampleArgs {
    /// Input VCF file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (defaults to overwriting the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sample identifier; becomes the new header column
    #[arg(long)]
    pub id: String,

    /// Sequencing assay
    #[arg(long, default_value = NOT_AVAILABLE)]
    pub assay: String,

    /// Ethnicity of the source individual
    #[arg(long, default_value = NOT_AVAILABLE)]
    pub ethnicity: String,

    /// Disease of the source individual
    #[arg(long, default_value = NOT_AVAILABLE)]
    pub disease: String,

    /// Tissue the sample was taken from
    #[arg(long, default_value = NOT_AVAILABLE)]
    pub tissue: String,

    /// Free-text description
    #[arg(long, default_value = NOT_AVAILABLE)]
    pub description: String,

    /// Colon-separated tag values for one record; repeat once per record, in file order
    #[arg(long = "value", conflicts_with = "values_file")]
    pub values: Vec<String>,

    /// File with one colon-separated tag value string per line, in record order
    #[arg(long)]
    pub values_file: Option<PathBuf>,
}

/// Execute add-sample subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed, the sample cannot be added,
/// or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AddSampleArgs, format: OutputFormat, config: &ParserConfig) -> anyhow::Result<()> {
    let mut document = load(&args.input, config)?;

    let sample = SampleDeclaration::new(&args.id)
        .with_assay(&args.assay)
        .with_ethnicity(&args.ethnicity)
        .with_disease(&args.disease)
        .with_tissue(&args.tissue)
        .with_description(&args.description);

    let tag_values = match &args.values_file {
        Some(path) => Some(read_values_file(path)?),
        None if args.values.is_empty() => None,
        None => Some(args.values.clone()),
    };

    let added = document.add_sample(sample, tag_values)?;
    let destination = save(&document, &args.input, args.output.as_ref())?;

    match format {
        OutputFormat::Text => {
            println!("Added sample {} to {}", added.id, destination.display());
            if added.defaults_substituted {
                println!("  No values supplied: every tag set to 1 for all records");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&added)?),
    }

    Ok(())
}

/// Read one value string per non-blank line
fn read_values_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
