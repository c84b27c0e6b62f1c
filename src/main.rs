use clap::Parser;
use tracing_subscriber::EnvFilter;

use vcf_edit::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("vcf_edit=debug,info")
    } else {
        EnvFilter::new("vcf_edit=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = cli.parser_config();

    match cli.command {
        cli::Commands::View(args) => {
            cli::view::run(args, cli.format, &config)?;
        }
        cli::Commands::AddFormat(args) => {
            cli::add_format::run(args, cli.format, &config)?;
        }
        cli::Commands::AddSample(args) => {
            cli::add_sample::run(args, cli.format, &config)?;
        }
    }

    Ok(())
}
