//! `legal-analyze`: print an analysis report for one legal document.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_directive = if cli.verbose {
        "legal_analysis=debug,legal_analysis_extract=debug"
    } else {
        "legal_analysis=warn,legal_analysis_extract=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
