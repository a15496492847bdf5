//! Loading documents into [`RawText`].

use std::fmt;
use std::fs;
use std::path::Path;

use legal_analysis::RawText;

use crate::{Document, DocumentDecoder, DocumentFormat, ExtractError, ExtractResult};

/// Something worth telling the user about a load that still succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The file was not valid UTF-8 and was read as Latin-1.
    Latin1Fallback,
    /// The Word decoder failed; the text is empty.
    DecodeFailed { message: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Latin1Fallback => {
                f.write_str("file is not valid UTF-8; decoded as Latin-1")
            }
            Diagnostic::DecodeFailed { message } => {
                write!(f, "could not decode Word document, continuing with empty text: {}", message)
            }
        }
    }
}

/// Text of a loaded document plus any diagnostics raised while loading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: RawText,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    fn clean(text: impl Into<RawText>) -> Self {
        Self {
            text: text.into(),
            diagnostics: Vec::new(),
        }
    }
}

/// Reads plain text and Word documents.
///
/// Word support is a capability: an extractor built without a decoder
/// reports [`ExtractError::UnsupportedFormat`] for `.docx` files.
pub struct Extractor {
    word_decoder: Option<Box<dyn DocumentDecoder>>,
}

impl Extractor {
    /// An extractor with the bundled `.docx` decoder, when compiled in.
    pub fn new() -> Self {
        #[cfg(feature = "docx")]
        {
            Self::with_word_decoder(crate::DocxDecoder::new())
        }
        #[cfg(not(feature = "docx"))]
        {
            Self::without_word_decoder()
        }
    }

    pub fn without_word_decoder() -> Self {
        Self { word_decoder: None }
    }

    pub fn with_word_decoder(decoder: impl DocumentDecoder + 'static) -> Self {
        Self {
            word_decoder: Some(Box::new(decoder)),
        }
    }

    pub fn supports(&self, format: DocumentFormat) -> bool {
        match format {
            DocumentFormat::PlainText => true,
            DocumentFormat::WordDocument => self.word_decoder.is_some(),
        }
    }

    /// Load `path` as `format`.
    ///
    /// Fails with [`ExtractError::NotFound`] before looking at the format,
    /// and with [`ExtractError::UnsupportedFormat`] when no decoder is
    /// available. Decoder failures are not errors: they yield empty text
    /// and a [`Diagnostic::DecodeFailed`].
    pub fn load(&self, path: impl AsRef<Path>, format: DocumentFormat) -> ExtractResult<Extraction> {
        let path = path.as_ref();
        ensure_file(path)?;

        match format {
            DocumentFormat::PlainText => read_plain_text(path),
            DocumentFormat::WordDocument => {
                let decoder = self.word_decoder.as_ref().ok_or_else(|| {
                    ExtractError::UnsupportedFormat {
                        format: format.to_string(),
                    }
                })?;

                match decoder.decode(path) {
                    Ok(text) => {
                        tracing::debug!(path = %path.display(), chars = text.chars().count(), "decoded word document");
                        Ok(Extraction::clean(text))
                    }
                    Err(err) => {
                        tracing::warn!(path = %path.display(), error = %err, "word decoding failed, using empty text");
                        Ok(Extraction {
                            text: RawText::empty(),
                            diagnostics: vec![Diagnostic::DecodeFailed {
                                message: err.to_string(),
                            }],
                        })
                    }
                }
            }
        }
    }

    pub fn load_document(&self, document: &Document) -> ExtractResult<Extraction> {
        self.load(&document.path, document.format)
    }

    /// Load `path`, inferring the format from its extension.
    pub fn load_path(&self, path: impl AsRef<Path>) -> ExtractResult<Extraction> {
        let path = path.as_ref();
        ensure_file(path)?;
        let format = DocumentFormat::from_path(path)?;
        self.load(path, format)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor")
            .field("word_decoder", &self.word_decoder.is_some())
            .finish()
    }
}

/// Existence is checked before anything else about the document.
fn ensure_file(path: &Path) -> ExtractResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ExtractError::NotFound {
            path: path.to_path_buf(),
            source: None,
        })
    }
}

fn read_plain_text(path: &Path) -> ExtractResult<Extraction> {
    let bytes = fs::read(path).map_err(|err| ExtractError::NotFound {
        path: path.to_path_buf(),
        source: Some(err),
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(Extraction::clean(text)),
        Err(err) => {
            tracing::warn!(path = %path.display(), "not valid UTF-8, falling back to Latin-1");
            // Every byte is a Latin-1 code point, so this cannot fail.
            let text: String = err.as_bytes().iter().map(|&b| b as char).collect();
            Ok(Extraction {
                text: RawText::new(text),
                diagnostics: vec![Diagnostic::Latin1Fallback],
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(suffix: &str, bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn test_reads_utf8_text() {
        let file = temp_file(".txt", "Section 1. “Premises” means the building.".as_bytes());

        let extraction = Extractor::without_word_decoder()
            .load(file.path(), DocumentFormat::PlainText)
            .unwrap();

        assert_eq!(extraction.text.as_str(), "Section 1. “Premises” means the building.");
        assert!(extraction.diagnostics.is_empty());
    }

    #[test]
    fn test_falls_back_to_latin1() {
        // "Café Ltd" with a Latin-1 encoded é
        let file = temp_file(".txt", b"Caf\xe9 Ltd");

        let extraction = Extractor::without_word_decoder()
            .load(file.path(), DocumentFormat::PlainText)
            .unwrap();

        assert_eq!(extraction.text.as_str(), "Café Ltd");
        assert_eq!(extraction.diagnostics, vec![Diagnostic::Latin1Fallback]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = Extractor::new()
            .load(&missing, DocumentFormat::PlainText)
            .unwrap_err();
        assert!(matches!(err, ExtractError::NotFound { ref path, .. } if *path == missing));

        // Not-found wins over an unknown extension.
        let err = Extractor::new().load_path(dir.path().join("missing.pdf")).unwrap_err();
        assert!(matches!(err, ExtractError::NotFound { .. }));
    }

    #[test]
    fn test_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Extractor::new()
            .load(dir.path(), DocumentFormat::PlainText)
            .unwrap_err();
        assert!(matches!(err, ExtractError::NotFound { .. }));
    }

    #[test]
    fn test_load_path_on_directory_is_not_found() {
        let dir = tempfile::Builder::new().suffix(".txt").tempdir().unwrap();
        let err = Extractor::new().load_path(dir.path()).unwrap_err();
        assert!(matches!(err, ExtractError::NotFound { ref path, .. } if path == dir.path()));
    }

    #[test]
    fn test_load_path_rejects_unknown_extension() {
        let file = temp_file(".rtf", b"{\\rtf1}");
        let err = Extractor::new().load_path(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat { ref format } if format == ".rtf"));
    }

    #[test]
    fn test_word_document_without_decoder_is_unsupported() {
        let file = temp_file(".docx", b"PK");
        let extractor = Extractor::without_word_decoder();

        assert!(!extractor.supports(DocumentFormat::WordDocument));
        let err = extractor.load_path(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat { ref format } if format == "word-document"));
    }

    #[test]
    fn test_decoder_failure_yields_empty_text() {
        let file = temp_file(".docx", b"corrupt");
        let extractor = Extractor::with_word_decoder(|path: &Path| -> ExtractResult<String> {
            Err(ExtractError::Decode {
                path: path.to_path_buf(),
                message: "bad archive".to_string(),
            })
        });

        let extraction = extractor.load(file.path(), DocumentFormat::WordDocument).unwrap();

        assert!(extraction.text.is_empty());
        assert_eq!(extraction.diagnostics.len(), 1);
        match &extraction.diagnostics[0] {
            Diagnostic::DecodeFailed { message } => assert!(message.ends_with("bad archive")),
            other => panic!("unexpected diagnostic: {:?}", other),
        }
    }

    #[test]
    fn test_decoder_output_is_used() {
        let file = temp_file(".docx", b"ignored");
        let extractor = Extractor::with_word_decoder(|_: &Path| -> ExtractResult<String> {
            Ok("PLAINTIFF: Jane Roe\n\nDEFENDANT: John Doe".to_string())
        });

        let document = Document::from_path(file.path()).unwrap();
        let extraction = extractor.load_document(&document).unwrap();

        assert_eq!(extraction.text.as_str(), "PLAINTIFF: Jane Roe\n\nDEFENDANT: John Doe");
        assert!(extraction.diagnostics.is_empty());
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_bundled_decoder_swallows_corrupt_docx() {
        let file = temp_file(".docx", b"this is not a zip archive");

        let extraction = Extractor::new().load_path(file.path()).unwrap();

        assert_eq!(extraction.text.as_str(), "");
        assert!(matches!(extraction.diagnostics[..], [Diagnostic::DecodeFailed { .. }]));
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_bundled_decoder_reads_table_cells() {
        use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

        let paragraph = |text: &str| Paragraph::new().add_run(Run::new().add_text(text));
        let fee_cell = TableCell::new().add_paragraph(paragraph("Fee: $10,000.00"));
        let docx = Docx::new()
            .add_paragraph(paragraph("THIS AGREEMENT made between Acme Corp and Globex Inc;"))
            .add_table(Table::new(vec![TableRow::new(vec![fee_cell])]));

        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        docx.pack(file.as_file_mut()).unwrap();

        let extraction = Extractor::new().load_path(file.path()).unwrap();

        assert!(extraction.diagnostics.is_empty());
        assert_eq!(
            extraction.text.as_str(),
            "THIS AGREEMENT made between Acme Corp and Globex Inc;\n\nFee: $10,000.00"
        );
    }
}
