//! Monetary amount extraction.
//!
//! Two families over the whole text:
//! - `$1,250.00`, `$ 300`
//! - `USD 1,250`, `US Dollars 1,250.00`, `United States Dollars 1,250`

use once_cell::sync::Lazy;

use super::{compile_patterns, find_all, NamedPattern};

static MONEY_PATTERNS: Lazy<Vec<NamedPattern>> = Lazy::new(|| {
    compile_patterns(&[
        ("dollar_sign", r"\$\s*\d{1,3}(?:,\d{3})*(?:\.\d{2})?"),
        (
            "currency_name",
            r"(?:USD|US Dollars|United States Dollars) \d{1,3}(?:,\d{3})*(?:\.\d{2})?",
        ),
    ])
});

/// Extracts dollar amounts.
#[derive(Debug, Clone, Default)]
pub struct MonetaryAmountExtractor;

impl MonetaryAmountExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> Vec<String> {
        find_all(&MONEY_PATTERNS, text)
    }
}
