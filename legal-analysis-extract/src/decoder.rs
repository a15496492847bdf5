//! Word document decoding capability.
//!
//! The [`Extractor`](crate::Extractor) is handed a decoder at construction
//! time instead of probing for one, so an environment without Word support
//! is just an extractor built without a decoder.

use std::path::Path;

use crate::ExtractResult;

/// Turns a document file into plain text.
pub trait DocumentDecoder: Send + Sync {
    fn decode(&self, path: &Path) -> ExtractResult<String>;
}

impl<F> DocumentDecoder for F
where
    F: Fn(&Path) -> ExtractResult<String> + Send + Sync,
{
    fn decode(&self, path: &Path) -> ExtractResult<String> {
        self(path)
    }
}

#[cfg(feature = "docx")]
pub use docx::DocxDecoder;

#[cfg(feature = "docx")]
mod docx {
    use std::fs;
    use std::path::Path;

    use docx_rs::{
        read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, Table,
        TableCellContent, TableChild, TableRowChild,
    };

    use super::DocumentDecoder;
    use crate::{ExtractError, ExtractResult};

    /// Decodes `.docx` files with `docx-rs`.
    ///
    /// A `.docx` file is a ZIP archive of XML parts. Every paragraph becomes
    /// one block of text: top-level paragraphs and, row by row, the
    /// paragraphs of each table cell. Runs inside hyperlinks and tracked
    /// insertions count as paragraph text. Non-empty blocks are separated by
    /// a blank line.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DocxDecoder;

    impl DocxDecoder {
        pub fn new() -> Self {
            Self
        }

        /// Decode an in-memory `.docx` archive.
        pub fn decode_bytes(&self, bytes: &[u8]) -> Result<String, String> {
            let docx = read_docx(bytes).map_err(|err| format!("{:?}", err))?;

            let mut blocks = Vec::new();
            for child in &docx.document.children {
                match child {
                    DocumentChild::Paragraph(paragraph) => blocks.push(paragraph_text(paragraph)),
                    DocumentChild::Table(table) => push_table_blocks(table, &mut blocks),
                    _ => {}
                }
            }

            blocks.retain(|text| !text.trim().is_empty());
            Ok(blocks.join("\n\n"))
        }
    }

    impl DocumentDecoder for DocxDecoder {
        fn decode(&self, path: &Path) -> ExtractResult<String> {
            let bytes = fs::read(path).map_err(|err| ExtractError::Decode {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;

            self.decode_bytes(&bytes)
                .map_err(|message| ExtractError::Decode {
                    path: path.to_path_buf(),
                    message,
                })
        }
    }

    /// One block per cell paragraph; nested tables are walked in place.
    fn push_table_blocks(table: &Table, blocks: &mut Vec<String>) {
        for TableChild::TableRow(row) in &table.rows {
            for TableRowChild::TableCell(cell) in &row.cells {
                for content in &cell.children {
                    match content {
                        TableCellContent::Paragraph(paragraph) => {
                            blocks.push(paragraph_text(paragraph))
                        }
                        TableCellContent::Table(nested) => push_table_blocks(nested, blocks),
                        _ => {}
                    }
                }
            }
        }
    }

    fn paragraph_text(paragraph: &Paragraph) -> String {
        let mut text = String::new();
        push_paragraph_children(&paragraph.children, &mut text);
        text
    }

    fn push_paragraph_children(children: &[ParagraphChild], text: &mut String) {
        for child in children {
            match child {
                ParagraphChild::Run(run) => push_run(run, text),
                ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, text),
                ParagraphChild::Insert(insert) => {
                    for insert_child in &insert.children {
                        if let InsertChild::Run(run) = insert_child {
                            push_run(run, text);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    fn push_run(run: &Run, text: &mut String) {
        for run_child in &run.children {
            match run_child {
                RunChild::Text(t) => text.push_str(&t.text),
                RunChild::Tab(_) => text.push('\t'),
                RunChild::Break(_) => text.push('\n'),
                _ => {}
            }
        }
    }

}
