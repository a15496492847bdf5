//! Document formats and the documents that carry them.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{ExtractError, ExtractResult};

/// Source formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// `.txt`, read as UTF-8 with a Latin-1 fallback.
    PlainText,
    /// `.docx`, decoded by a [`DocumentDecoder`](crate::DocumentDecoder).
    WordDocument,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::PlainText => "plain-text",
            DocumentFormat::WordDocument => "word-document",
        }
    }

    /// Infer the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> ExtractResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(DocumentFormat::PlainText),
            "docx" => Ok(DocumentFormat::WordDocument),
            "" => Err(ExtractError::UnsupportedFormat {
                format: "(no extension)".to_string(),
            }),
            other => Err(ExtractError::UnsupportedFormat {
                format: format!(".{}", other),
            }),
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = ExtractError;

    /// Accepts `plain-text`/`txt` and `word-document`/`docx`.
    fn from_str(tag: &str) -> ExtractResult<Self> {
        match tag.trim().to_lowercase().as_str() {
            "plain-text" | "txt" => Ok(DocumentFormat::PlainText),
            "word-document" | "docx" => Ok(DocumentFormat::WordDocument),
            _ => Err(ExtractError::UnsupportedFormat {
                format: tag.to_string(),
            }),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document on disk and the format it should be read as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub format: DocumentFormat,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, format: DocumentFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Build a document whose format is inferred from its extension.
    pub fn from_path(path: impl Into<PathBuf>) -> ExtractResult<Self> {
        let path = path.into();
        let format = DocumentFormat::from_path(&path)?;
        Ok(Self { path, format })
    }
}
