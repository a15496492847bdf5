//! Error types for text extraction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while extracting text from a document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The path does not resolve to a readable file.
    #[error("file not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The format is unknown, or no decoder for it is available.
    #[error("unsupported or unavailable file format: {format}")]
    UnsupportedFormat { format: String },

    /// A decoder could not turn the file into text.
    #[error("failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
