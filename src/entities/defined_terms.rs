//! Defined term extraction.
//!
//! Two families, applied in order:
//! - `"Term" means ...` (straight or typographic quotes)
//! - `ALL CAPS TERM means ...`
//!
//! The connector may be `means`, `shall mean` or `refers to`; the definition
//! runs up to the next period. A term found again later overwrites the
//! earlier definition.

use once_cell::sync::Lazy;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{compile_patterns, NamedPattern};

static DEFINITION_PATTERNS: Lazy<Vec<NamedPattern>> = Lazy::new(|| {
    compile_patterns(&[
        (
            "quoted",
            r#"["“]([^"”]+)["”]\s+(?:means|shall mean|refers to)\s+([^.]+)"#,
        ),
        (
            "all_caps",
            r"([A-Z][A-Z\s]+)\s+(?:means|shall mean|refers to)\s+([^.]+)",
        ),
    ])
});

/// Term to definition map that remembers insertion order.
///
/// Re-inserting a term replaces its definition but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinedTerms {
    entries: Vec<(String, String)>,
}

impl DefinedTerms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite, returning the replaced definition.
    pub fn insert(
        &mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Option<String> {
        let term = term.into();
        let definition = definition.into();

        match self.entries.iter().position(|(existing, _)| *existing == term) {
            Some(pos) => Some(std::mem::replace(&mut self.entries[pos].1, definition)),
            None => {
                self.entries.push((term, definition));
                None
            }
        }
    }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == term)
            .map(|(_, definition)| definition.as_str())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.get(term).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(term, definition)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(term, definition)| (term.as_str(), definition.as_str()))
    }
}

impl Serialize for DefinedTerms {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (term, definition) in &self.entries {
            map.serialize_entry(term, definition)?;
        }
        map.end()
    }
}

/// Extracts explicitly defined terms.
#[derive(Debug, Clone, Default)]
pub struct DefinedTermExtractor;

impl DefinedTermExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> DefinedTerms {
        let mut terms = DefinedTerms::new();

        for pattern in DEFINITION_PATTERNS.iter() {
            for captures in pattern.regex.captures_iter(text) {
                if let (Some(term), Some(definition)) = (captures.get(1), captures.get(2)) {
                    let replaced = terms.insert(term.as_str().trim(), definition.as_str().trim());
                    if replaced.is_some() {
                        tracing::trace!(
                            family = pattern.name,
                            term = term.as_str().trim(),
                            "defined term redefined"
                        );
                    }
                }
            }
        }

        terms
    }
}
