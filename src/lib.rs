#![doc(issue_tracker_base_url = "https://github.com/legal-analysis/legal-analysis/issues/")]

//! Rule-based analysis of legal documents.
//!
//! Every stage is a pure function over a single [`RawText`]:
//!
//! ## Stages
//!
//! - [`DocumentStatistics`] - Word, sentence and paragraph counts ([`compute_stats`])
//! - [`DocumentTypeClassifier`] - Keyword profiles for contracts, filings, opinions, legislation and memos
//! - [`EntityExtractor`] - Parties, dates, monetary amounts and defined terms
//! - [`ReportGenerator`] - Renders an [`AnalysisResult`] as a plain-text report
//!
//! [`Analyzer`] runs the three analyses over the same text and combines them
//! into an [`AnalysisResult`]. Turning files into text lives in the
//! `legal-analysis-extract` crate.
//!
//! ## Example
//!
//! ```ignore
//! use legal_analysis::{Analyzer, RawText, ReportGenerator};
//!
//! let text = RawText::from("THIS AGREEMENT made between Acme Corp and Globex Inc.");
//! let result = Analyzer::default().analyze(&text);
//! println!("{}", ReportGenerator::default().render(&result));
//! ```

mod analysis;
mod classifier;
mod config;
mod entities;
mod errors;
mod report;
mod statistics;
mod text;

pub use analysis::{AnalysisResult, Analyzer};
pub use classifier::{DocumentType, DocumentTypeClassifier, DocumentTypeProfile, PROFILES};
pub use config::{AnalyzerConfig, ReportConfig};
pub use entities::{
    DateExtractor, DefinedTermExtractor, DefinedTerms, EntityBundle, EntityExtractor,
    MonetaryAmountExtractor, PartyExtractor,
};
pub use errors::{ConfigError, ConfigResult};
pub use report::ReportGenerator;
pub use statistics::{
    compute_stats, compute_stats_with_words, split_paragraphs, split_sentences, tokenize_words,
    DocumentStatistics, WordCount, WordFrequencyTable,
};
pub use text::RawText;
