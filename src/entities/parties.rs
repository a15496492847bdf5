//! Party extraction.
//!
//! Patterns, tried in order:
//! - `between|among X, Y` / `between X and Y`
//! - `THIS AGREEMENT made ... between X and Y`
//! - `PLAINTIFF: X`
//! - `DEFENDANT: X`
//!
//! A party phrase starts with a capital letter and runs over letters,
//! whitespace and commas. A period is allowed only when a comma follows it
//! directly, so `Globex Inc., a Nevada corporation` keeps its `Inc.`.
//! A trailing `a/an <description>` clause is then removed.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{compile_patterns, NamedPattern};

static PARTY_PATTERNS: Lazy<Vec<NamedPattern>> = Lazy::new(|| {
    compile_patterns(&[
        (
            "between_among",
            r"(?:between|among)\s+([A-Z](?:[A-Za-z\s,]|\.,)+)(?:,|and)\s+([A-Z](?:[A-Za-z\s,]|\.,)+)",
        ),
        (
            "agreement_preamble",
            r"(?:THIS AGREEMENT|CONTRACT) made (?:and entered )?(?:into )?(?:by and )?between ([A-Z](?:[A-Za-z\s,]|\.,)+) and ([A-Z](?:[A-Za-z\s,]|\.,)+)",
        ),
        ("plaintiff", r"(?:PLAINTIFF|Plaintiff)s?:?\s+([A-Z](?:[A-Za-z\s,]|\.,)+)"),
        ("defendant", r"(?:DEFENDANT|Defendant)s?:?\s+([A-Z](?:[A-Za-z\s,]|\.,)+)"),
    ])
});

/// `, a Delaware corporation` and similar descriptive tails.
static DESCRIPTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",?\s*\ban?\s+.+").expect("Invalid party description pattern"));

/// Extracts party names from the opening of a document.
#[derive(Debug, Clone)]
pub struct PartyExtractor {
    /// Party declarations are expected near the start of a document.
    scan_chars: usize,
}

impl Default for PartyExtractor {
    fn default() -> Self {
        Self { scan_chars: 3000 }
    }
}

impl PartyExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scan_chars(scan_chars: usize) -> Self {
        Self { scan_chars }
    }

    /// Unique party names in first-seen order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let window = leading_chars(text, self.scan_chars);
        let mut parties: Vec<String> = Vec::new();

        for pattern in PARTY_PATTERNS.iter() {
            for captures in pattern.regex.captures_iter(window) {
                for group in captures.iter().skip(1).flatten() {
                    let party = clean_party(group.as_str());
                    if !party.is_empty() && !parties.contains(&party) {
                        parties.push(party);
                    }
                }
            }
        }

        parties
    }
}

/// Strip a trailing `a/an <description>` clause and surrounding whitespace.
fn clean_party(raw: &str) -> String {
    DESCRIPTION_PATTERN.replace_all(raw, "").trim().to_string()
}

/// The first `max_chars` characters of `text`.
fn leading_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
