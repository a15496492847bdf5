//! Word, sentence and paragraph segmentation plus the counts derived from it.
//!
//! Segmentation is deliberately heuristic:
//! - A word is a maximal run of word characters (letters, digits, underscore).
//! - A sentence ends at a whitespace character that follows `.`, `?` or `!`,
//!   except after an abbreviation shaped like `U.S.` or `St.`.
//! - Paragraphs are separated by blank lines.
//!
//! Pieces that are empty or only whitespace are not counted.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("Invalid word pattern"));

static PARAGRAPH_BREAK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("Invalid paragraph break pattern"));

/// Counts derived from one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DocumentStatistics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// `word_count / sentence_count`, or 0 when there are no sentences.
    pub average_words_per_sentence: f64,
}

impl DocumentStatistics {
    pub fn new(word_count: usize, sentence_count: usize, paragraph_count: usize) -> Self {
        let average_words_per_sentence = if sentence_count > 0 {
            word_count as f64 / sentence_count as f64
        } else {
            0.0
        };

        Self {
            word_count,
            sentence_count,
            paragraph_count,
            average_words_per_sentence,
        }
    }
}

/// Compute statistics for `text`.
pub fn compute_stats(text: &str) -> DocumentStatistics {
    compute_stats_with_words(text, &tokenize_words(text))
}

/// Like [`compute_stats`], for callers that already hold
/// `tokenize_words(text)`.
pub fn compute_stats_with_words<S: AsRef<str>>(text: &str, words: &[S]) -> DocumentStatistics {
    DocumentStatistics::new(
        words.len(),
        split_sentences(text).len(),
        split_paragraphs(text).len(),
    )
}

/// Lowercased word tokens in text order.
pub fn tokenize_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split `text` into sentences.
///
/// The separating whitespace character is dropped; everything else stays in
/// the piece it belongs to.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut pieces = Vec::new();
    let mut start = 0;

    for (idx, &(offset, c)) in chars.iter().enumerate() {
        if c.is_whitespace() && is_sentence_break(&chars, idx) {
            pieces.push(&text[start..offset]);
            start = offset + c.len_utf8();
        }
    }
    pieces.push(&text[start..]);

    pieces.retain(|piece| !piece.trim().is_empty());
    pieces
}

/// Split `text` on blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK_PATTERN
        .split(text)
        .filter(|piece| !piece.trim().is_empty())
        .collect()
}

/// Whether the whitespace at `chars[idx]` closes a sentence.
fn is_sentence_break(chars: &[(usize, char)], idx: usize) -> bool {
    let before = |n: usize| idx.checked_sub(n).map(|i| chars[i].1);

    let terminator = match before(1) {
        Some(c @ ('.' | '?' | '!')) => c,
        _ => return false,
    };

    // "St. John"
    if terminator == '.' {
        if let (Some(upper), Some(lower)) = (before(3), before(2)) {
            if upper.is_ascii_uppercase() && lower.is_ascii_lowercase() {
                return false;
            }
        }
    }

    // "U.S. law"
    if let (Some(a), Some(dot), Some(b)) = (before(4), before(3), before(2)) {
        if is_word_char(a) && dot == '.' && is_word_char(b) {
            return false;
        }
    }

    true
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A word and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Occurrence counts keyed by lowercased word, remembering first-seen order.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
}

impl WordFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count already tokenized words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for word in words {
            table.record(word.as_ref());
        }
        table
    }

    /// Tokenize and count `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_words(tokenize_words(text))
    }

    pub fn record(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&pos) => self.entries[pos].count += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push(WordCount {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map(|&pos| self.entries[pos].count)
            .unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most frequent words, highest count first.
    ///
    /// Equal counts keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}
