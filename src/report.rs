//! Plain-text analysis report.
//!
//! Section order is fixed: banner, document type, statistics, one section
//! per non-empty entity category, common words. Entity sections list at most
//! [`ReportConfig::max_items`] items followed by a `... and N more` line.

use std::fmt::{self, Write};

use crate::{AnalysisResult, ReportConfig};

const TITLE: &str = "LEGAL DOCUMENT ANALYSIS REPORT";
const RULE_WIDTH: usize = 20;

/// Renders an [`AnalysisResult`] as text.
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Render into a new string. Lines are separated by `\n` with no
    /// trailing newline.
    pub fn render(&self, result: &AnalysisResult) -> String {
        self.lines(result).join("\n")
    }

    /// Render into any formatting sink.
    pub fn render_to<W: Write>(&self, result: &AnalysisResult, out: &mut W) -> fmt::Result {
        for (idx, line) in self.lines(result).iter().enumerate() {
            if idx > 0 {
                out.write_char('\n')?;
            }
            out.write_str(line)?;
        }
        Ok(())
    }

    fn lines(&self, result: &AnalysisResult) -> Vec<String> {
        let stats = &result.statistics;
        let mut lines = vec![
            TITLE.to_string(),
            "=".repeat(TITLE.len()),
            format!("Document Type: {}", result.document_type),
            format!("Word Count: {}", stats.word_count),
            format!("Sentence Count: {}", stats.sentence_count),
            format!("Paragraph Count: {}", stats.paragraph_count),
            format!(
                "Average Words Per Sentence: {:.1}",
                stats.average_words_per_sentence
            ),
            String::new(),
        ];

        let entities = &result.entities;
        if !entities.is_empty() {
            lines.push("LEGAL ENTITIES".to_string());
            lines.push("-".repeat(RULE_WIDTH));

            self.push_section(&mut lines, "Parties", entities.parties.iter().cloned(), "");
            self.push_section(&mut lines, "Key Dates", entities.dates.iter().cloned(), "");
            self.push_section(
                &mut lines,
                "Monetary Amounts",
                entities.monetary_amounts.iter().cloned(),
                "",
            );
            self.push_section(
                &mut lines,
                "Defined Terms",
                entities
                    .defined_terms
                    .iter()
                    .map(|(term, definition)| format!("{}: {}", term, self.preview(definition))),
                " terms",
            );
        }

        if !result.common_words.is_empty() {
            lines.push("COMMON WORDS".to_string());
            lines.push("-".repeat(RULE_WIDTH));
            lines.extend(
                result
                    .common_words
                    .iter()
                    .map(|entry| format!("{}: {}", entry.word, entry.count)),
            );
        }

        while lines.last().map_or(false, |line| line.is_empty()) {
            lines.pop();
        }

        lines
    }

    /// Heading, capped item list, overflow line and a closing blank line.
    /// Empty categories add nothing.
    fn push_section<I>(&self, lines: &mut Vec<String>, heading: &str, items: I, overflow_noun: &str)
    where
        I: ExactSizeIterator<Item = String>,
    {
        let total = items.len();
        if total == 0 {
            return;
        }

        lines.push(format!("{}:", heading));
        lines.extend(
            items
                .take(self.config.max_items)
                .map(|item| format!("- {}", item)),
        );
        if total > self.config.max_items {
            lines.push(format!(
                "  ... and {} more{}",
                total - self.config.max_items,
                overflow_noun
            ));
        }
        lines.push(String::new());
    }

    /// Definition cut to the preview width, with `...` when shortened.
    fn preview(&self, definition: &str) -> String {
        let limit = self.config.definition_preview_chars;
        if definition.chars().count() > limit {
            let mut short: String = definition.chars().take(limit).collect();
            short.push_str("...");
            short
        } else {
            definition.to_string()
        }
    }
}
