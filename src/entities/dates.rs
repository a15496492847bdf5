//! Date extraction.
//!
//! Matches, family by family over the whole text:
//! - `January 1, 2025`
//! - `1/15/2025`
//! - `2025-01-15`
//!
//! Results are concatenated family by family, so a document's slash dates
//! always follow its written-out dates. Repeats are kept.

use once_cell::sync::Lazy;

use super::{compile_patterns, find_all, NamedPattern};

static DATE_PATTERNS: Lazy<Vec<NamedPattern>> = Lazy::new(|| {
    compile_patterns(&[
        (
            "month_name",
            r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},\s+\d{4}\b",
        ),
        ("slash", r"\b\d{1,2}/\d{1,2}/\d{4}\b"),
        ("iso", r"\b\d{4}-\d{2}-\d{2}\b"),
    ])
});

/// Extracts dates written in common legal formats.
#[derive(Debug, Clone, Default)]
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        find_all(&DATE_PATTERNS, text)
    }
}
