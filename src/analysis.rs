//! The analysis pipeline: statistics, classification and entity extraction
//! over one text, combined into an [`AnalysisResult`].

use serde::Serialize;

use crate::statistics::{compute_stats_with_words, tokenize_words};
use crate::{
    AnalyzerConfig, DocumentStatistics, DocumentType, DocumentTypeClassifier, EntityBundle,
    EntityExtractor, RawText, WordCount, WordFrequencyTable,
};

/// Everything the report needs about one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub statistics: DocumentStatistics,
    pub document_type: DocumentType,
    pub entities: EntityBundle,
    /// Most frequent words, highest count first.
    pub common_words: Vec<WordCount>,
}

/// Runs the three independent analyses over a [`RawText`].
///
/// Holds configuration only, so one analyzer can be reused for any number
/// of documents (and shared across threads).
#[derive(Debug, Clone)]
pub struct Analyzer {
    classifier: DocumentTypeClassifier,
    entities: EntityExtractor,
    common_words: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl Analyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            classifier: DocumentTypeClassifier::new(),
            entities: EntityExtractor::with_party_scan_chars(config.party_scan_chars),
            common_words: config.common_words,
        }
    }

    pub fn analyze(&self, text: &RawText) -> AnalysisResult {
        self.analyze_str(text.as_str())
    }

    pub fn analyze_str(&self, text: &str) -> AnalysisResult {
        tracing::debug!(chars = text.chars().count(), "starting text analysis");

        let words = tokenize_words(text);
        let statistics = compute_stats_with_words(text, &words);
        tracing::debug!(
            words = statistics.word_count,
            sentences = statistics.sentence_count,
            paragraphs = statistics.paragraph_count,
            "computed document statistics"
        );

        let common_words = WordFrequencyTable::from_words(&words).top(self.common_words);

        let document_type = self.classifier.classify(text);
        tracing::debug!(%document_type, "identified document type");

        let entities = self.entities.extract(text);

        AnalysisResult {
            statistics,
            document_type,
            entities,
            common_words,
        }
    }
}
