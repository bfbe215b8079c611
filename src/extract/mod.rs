//! Best-effort text recovery from Word documents
//!
//! `doc` works on raw bytes and never fails on content; `docx` parses the
//! OOXML container and reports structural problems as [`ExtractError`].

pub mod doc;
pub mod docx;
pub mod encoding;

pub use doc::{extract_printable, extract_sentences, NO_SENTENCES_FOUND};
pub use docx::{extract_docx_content, DocxContent};
pub use encoding::TextEncoding;

use std::path::PathBuf;

/// Errors that can occur while reading a document
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to read file '{0}': {1}")]
    FileRead(PathBuf, std::io::Error),

    #[error("Not a zip container: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Missing document part '{0}'")]
    MissingPart(String),

    #[error("Malformed document XML: {0}")]
    Xml(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Heuristic knobs for the extractors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Lines must be strictly longer than this to be kept
    pub min_line_len: usize,
    /// Sentences kept by the multi-encoding method
    pub max_sentences: usize,
    /// Collapse only horizontal whitespace, keeping line breaks
    pub preserve_line_breaks: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_line_len: 10,
            max_sentences: 20,
            preserve_line_breaks: false,
        }
    }
}

/// First `max_chars` characters of `text`, with `...` appended when cut
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
