//! PDF text extraction backed by `pdf_oxide`.
//!
//! Parsing is CPU-bound and synchronous, so the whole document is read on
//! tokio's blocking pool.  Pages are extracted sequentially in page order.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{DocumentExtractor, ExtractionError};

/// Extracts per-page text from PDF files.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Blocking extraction of every page of `path`.
    fn extract_blocking(path: &Path) -> Result<Vec<String>, ExtractionError> {
        let doc = pdf_oxide::document::PdfDocument::open(path)
            .map_err(|e| ExtractionError::Parse(e.to_string()))?;

        let page_count = doc
            .page_count()
            .map_err(|e| ExtractionError::Parse(e.to_string()))?;
        if page_count == 0 {
            return Err(ExtractionError::Parse("document has no pages".into()));
        }

        let mut pages = Vec::new();
        for page_idx in 0..page_count {
            let text = doc
                .extract_text(page_idx)
                .map_err(|e| ExtractionError::Parse(format!("page {}: {e}", page_idx + 1)))?;
            pages.push(text);
        }

        Ok(pages)
    }
}

/// Run `work` on the blocking pool.  A panicked or cancelled task becomes
/// [`ExtractionError::Internal`].
async fn run_blocking<T, F>(work: F) -> Result<T, ExtractionError>
where
    F: FnOnce() -> Result<T, ExtractionError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ExtractionError::Internal(e.to_string()))?
}

#[async_trait]
impl DocumentExtractor for PdfExtractor {
    async fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractionError> {
        let owned: PathBuf = path.to_path_buf();
        let pages = run_blocking(move || Self::extract_blocking(&owned)).await?;

        log::info!("pdf: extracted {} page(s) from {}", pages.len(), path.display());
        Ok(pages)
    }
}
