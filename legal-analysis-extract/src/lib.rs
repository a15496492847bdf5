//! Text extraction for legal-analysis.
//!
//! Turns a document on disk into a [`RawText`](legal_analysis::RawText):
//!
//! - [`DocumentFormat`] - Plain text (`.txt`) or Word (`.docx`)
//! - [`DocumentDecoder`] - Capability that turns a Word file into text
//! - [`Extractor`] - Loads a document, recovering from decode failures
//!
//! Plain text is read as UTF-8 and falls back to Latin-1. A Word document
//! that fails to decode yields an empty text plus a [`Diagnostic`], so the
//! analysis still produces a (degraded) report.
//!
//! ## Example
//!
//! ```ignore
//! use legal_analysis_extract::{DocumentFormat, Extractor};
//!
//! let extraction = Extractor::new().load("contract.txt", DocumentFormat::PlainText)?;
//! println!("{} characters", extraction.text.char_len());
//! ```

mod decoder;
mod errors;
mod extractor;
mod format;

pub use decoder::DocumentDecoder;
#[cfg(feature = "docx")]
pub use decoder::DocxDecoder;
pub use errors::{ExtractError, ExtractResult};
pub use extractor::{Diagnostic, Extraction, Extractor};
pub use format::{Document, DocumentFormat};
