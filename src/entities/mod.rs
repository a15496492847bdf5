//! Rule-based legal entity extraction.
//!
//! Four independent extractors, each driven by an ordered table of named
//! pattern families:
//!
//! - [`PartyExtractor`] - Parties named near the start of the document
//! - [`DateExtractor`] - Written-out, slash and ISO dates
//! - [`MonetaryAmountExtractor`] - Dollar amounts
//! - [`DefinedTermExtractor`] - `"Term" means ...` style definitions
//!
//! [`EntityExtractor`] runs all four over the same text.

mod dates;
mod defined_terms;
mod monetary;
mod parties;

pub use dates::DateExtractor;
pub use defined_terms::{DefinedTermExtractor, DefinedTerms};
pub use monetary::MonetaryAmountExtractor;
pub use parties::PartyExtractor;

use regex::Regex;
use serde::Serialize;

/// One named matching rule inside a pattern family table.
#[derive(Debug)]
pub(crate) struct NamedPattern {
    pub name: &'static str,
    pub regex: Regex,
}

/// Compile a `(name, pattern)` table. The tables are static, so a bad
/// pattern is a programming error.
pub(crate) fn compile_patterns(table: &[(&'static str, &str)]) -> Vec<NamedPattern> {
    table
        .iter()
        .map(|&(name, pattern)| NamedPattern {
            name,
            regex: Regex::new(pattern)
                .unwrap_or_else(|err| panic!("Invalid {} pattern: {}", name, err)),
        })
        .collect()
}

/// Every match of every pattern, pattern by pattern.
pub(crate) fn find_all(patterns: &[NamedPattern], text: &str) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|pattern| pattern.regex.find_iter(text).map(|m| m.as_str().to_string()))
        .collect()
}

/// Entities found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityBundle {
    /// Unique, first-seen order.
    pub parties: Vec<String>,
    /// Extraction order, duplicates kept.
    pub dates: Vec<String>,
    /// Extraction order, duplicates kept.
    pub monetary_amounts: Vec<String>,
    pub defined_terms: DefinedTerms,
}

impl EntityBundle {
    pub fn is_empty(&self) -> bool {
        self.parties.is_empty()
            && self.dates.is_empty()
            && self.monetary_amounts.is_empty()
            && self.defined_terms.is_empty()
    }
}

/// Runs the four entity extractors.
#[derive(Debug, Clone, Default)]
pub struct EntityExtractor {
    parties: PartyExtractor,
    dates: DateExtractor,
    monetary_amounts: MonetaryAmountExtractor,
    defined_terms: DefinedTermExtractor,
}

impl EntityExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan only the first `party_scan_chars` characters for parties.
    pub fn with_party_scan_chars(party_scan_chars: usize) -> Self {
        Self {
            parties: PartyExtractor::with_scan_chars(party_scan_chars),
            ..Self::default()
        }
    }

    pub fn extract(&self, text: &str) -> EntityBundle {
        let bundle = EntityBundle {
            parties: self.parties.extract(text),
            dates: self.dates.extract(text),
            monetary_amounts: self.monetary_amounts.extract(text),
            defined_terms: self.defined_terms.extract(text),
        };

        tracing::debug!(
            parties = bundle.parties.len(),
            dates = bundle.dates.len(),
            monetary_amounts = bundle.monetary_amounts.len(),
            defined_terms = bundle.defined_terms.len(),
            "extracted legal entities"
        );

        bundle
    }
}
