//! Document text extraction.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │            DocumentExtractor (async trait)           │
//! │                                                      │
//! │   ┌──────────────┐   .pdf   ┌──────────────┐         │
//! │   │ FileExtractor│────────▶│ PdfExtractor │         │
//! │   │ - kind check │          └──────────────┘         │
//! │   │ - exists?    │   .txt   ┌──────────────────┐     │
//! │   │              │────────▶│ TextFileExtractor│     │
//! │   └──────────────┘          └──────────────────┘     │
//! └──────────────────────────────────────────────────────┘
//!                          │ pages (in order)
//!                          ▼
//!              load_from_document() → Script
//! ```
//!
//! Extraction is all-or-nothing: any failure surfaces as an
//! [`ExtractionError`] and no partial script is produced.

pub mod pdf;
pub mod text_file;

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::script::{load_from_text, Script};

pub use pdf::PdfExtractor;
pub use text_file::TextFileExtractor;

// ---------------------------------------------------------------------------
// ExtractionError
// ---------------------------------------------------------------------------

/// All errors that can arise while pulling text out of a document.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExtractionError {
    /// The selected file does not exist.
    #[error("document not found: {0}")]
    NotFound(String),

    /// The file extension is not a supported document format.
    #[error("unsupported document format: {0}")]
    Unsupported(String),

    /// The file exists but could not be read.
    #[error("cannot read document: {0}")]
    Read(String),

    /// The document is corrupt or its text could not be decoded.
    #[error("cannot parse document: {0}")]
    Parse(String),

    /// The extraction task itself failed (e.g. a blocking task panicked).
    #[error("internal extraction error: {0}")]
    Internal(String),
}

// ---------------------------------------------------------------------------
// DocumentExtractor trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for document text extractors.
///
/// # Contract
///
/// - Returns the text of every page, in page order.
/// - Either every page is returned or an error is; never a partial list.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    /// Extract the text of each page of the document at `path`.
    async fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractionError>;
}

// Compile-time assertion: Box<dyn DocumentExtractor> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn DocumentExtractor>) {}
};

// ---------------------------------------------------------------------------
// DocumentKind
// ---------------------------------------------------------------------------

/// Extensions opened as PDF.
pub const PDF_EXTENSIONS: &[&str] = &["pdf"];

/// Extensions opened as UTF-8 text.
pub const PLAIN_TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md", "fountain"];

/// Document formats the reader knows how to open, detected by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Portable Document Format.
    Pdf,
    /// UTF-8 text (`.txt`, `.md`, `.fountain`).
    PlainText,
}

impl DocumentKind {
    /// Detect the kind of `path` from its extension (case-insensitive).
    ///
    /// ```
    /// use std::path::Path;
    /// use line_reader::extract::DocumentKind;
    ///
    /// assert_eq!(DocumentKind::from_path(Path::new("act1.PDF")), Some(DocumentKind::Pdf));
    /// assert_eq!(DocumentKind::from_path(Path::new("notes.txt")), Some(DocumentKind::PlainText));
    /// assert_eq!(DocumentKind::from_path(Path::new("song.mp3")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if PDF_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Pdf)
        } else if PLAIN_TEXT_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::PlainText)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// FileExtractor — routes to the right backend by extension
// ---------------------------------------------------------------------------

/// Production extractor: checks the file exists, then dispatches on
/// [`DocumentKind`].
#[derive(Debug, Clone, Default)]
pub struct FileExtractor {
    pdf: PdfExtractor,
    text: TextFileExtractor,
}

impl FileExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentExtractor for FileExtractor {
    async fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractionError> {
        if !path.exists() {
            return Err(ExtractionError::NotFound(path.display().to_string()));
        }

        match DocumentKind::from_path(path) {
            Some(DocumentKind::Pdf) => self.pdf.extract_pages(path).await,
            Some(DocumentKind::PlainText) => self.text.extract_pages(path).await,
            None => Err(ExtractionError::Unsupported(path.display().to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// load_from_document
// ---------------------------------------------------------------------------

/// Extract every page of `path`, join the pages in order (each followed by a
/// line break) and split the result into a [`Script`].
///
/// # Errors
///
/// Propagates the extractor's [`ExtractionError`] unchanged.
pub async fn load_from_document(
    extractor: &dyn DocumentExtractor,
    path: &Path,
) -> Result<Script, ExtractionError> {
    let pages = extractor.extract_pages(path).await?;
    log::debug!("extract: {} page(s) from {}", pages.len(), path.display());

    let mut full_text = String::new();
    for page in &pages {
        full_text.push_str(page);
        full_text.push('\n');
    }

    Ok(load_from_text(&full_text))
}

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

/// Extractor that returns a fixed page list or a fixed error.
#[cfg(test)]
pub struct MockExtractor {
    pub result: Result<Vec<String>, ExtractionError>,
}

#[cfg(test)]
impl MockExtractor {
    pub fn pages(pages: &[&str]) -> Self {
        Self {
            result: Ok(pages.iter().map(|p| p.to_string()).collect()),
        }
    }

    pub fn failing(err: ExtractionError) -> Self {
        Self { result: Err(err) }
    }
}

#[cfg(test)]
#[async_trait]
impl DocumentExtractor for MockExtractor {
    async fn extract_pages(&self, _path: &Path) -> Result<Vec<String>, ExtractionError> {
        self.result.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
