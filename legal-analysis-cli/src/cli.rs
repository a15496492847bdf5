use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use legal_analysis::{AnalysisResult, Analyzer, AnalyzerConfig, ReportGenerator};
use legal_analysis_extract::{DocumentFormat, Extractor};

/// Analyze a legal document: statistics, document type, parties, dates,
/// monetary amounts and defined terms.
#[derive(Parser, Debug)]
#[command(name = "legal-analyze", version)]
pub struct Cli {
    /// Document to analyze (.txt or .docx)
    pub path: PathBuf,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Input type; inferred from the extension when omitted
    /// (plain-text, txt, word-document, docx)
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub input_type: Option<DocumentFormat>,

    /// TOML file overriding the analysis limits
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log pipeline progress to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        self.run_with_notes(&mut io::stderr().lock())
    }

    /// Run the analysis, writing `note:` lines for recovered problems to
    /// `notes`.
    pub fn run_with_notes<W: Write>(self, notes: &mut W) -> Result<()> {
        let config = match &self.config {
            Some(path) => AnalyzerConfig::load(path)?,
            None => AnalyzerConfig::default(),
        };

        let extractor = Extractor::new();
        let extraction = match self.input_type {
            Some(format) => extractor.load(&self.path, format),
            None => extractor.load_path(&self.path),
        }
        .with_context(|| format!("could not read {}", self.path.display()))?;

        for diagnostic in &extraction.diagnostics {
            writeln!(notes, "note: {}", diagnostic).context("could not write diagnostics")?;
        }

        let result = Analyzer::new(&config).analyze(&extraction.text);
        let rendered = self.render(&config, &result)?;

        match &self.output {
            Some(path) => fs::write(path, format!("{}\n", rendered))
                .with_context(|| format!("could not write {}", path.display()))?,
            None => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", rendered).context("could not write to stdout")?;
            }
        }

        Ok(())
    }

    fn render(&self, config: &AnalyzerConfig, result: &AnalysisResult) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(ReportGenerator::new(config.report.clone()).render(result)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(result).context("could not serialize analysis")
            }
        }
    }
}
