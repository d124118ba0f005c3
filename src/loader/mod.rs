//! Script loading: source selection and the background load worker.
//!
//! Text loads are instantaneous and happen on the UI thread.  Document loads
//! go through [`LoadWorker`], which runs on the tokio runtime:
//!
//! ```text
//! UI ── LoadRequest (mpsc) ──▶ LoadWorker::run()
//!                                 │
//!                                 ├─ extractor.extract_pages().await
//!                                 │
//! UI ◀── LoadOutcome (mpsc) ──────┘  Ok(Script) | Err(ExtractionError)
//! ```
//!
//! The UI applies an outcome only when it arrives, so a failed load never
//! touches the reader's current script or position.

pub mod worker;

use std::path::PathBuf;

use crate::extract::{load_from_document, DocumentExtractor, ExtractionError};
use crate::script::{load_from_text, Script};

pub use worker::LoadWorker;

// ---------------------------------------------------------------------------
// LoadSource
// ---------------------------------------------------------------------------

/// Where the next script comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Raw text typed into the script area.
    Text(String),
    /// A document file on disk.
    Document(PathBuf),
}

impl LoadSource {
    /// Apply the selection policy: a selected document wins over the text
    /// area.  `document` counts as selected when it is not blank.
    pub fn select(document: &str, text: &str) -> Self {
        let document = document.trim();
        if document.is_empty() {
            Self::Text(text.to_string())
        } else {
            Self::Document(PathBuf::from(document))
        }
    }

    /// Short description for status messages and logs.
    pub fn label(&self) -> String {
        match self {
            Self::Text(_) => "typed text".to_string(),
            Self::Document(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

/// Load a script from `source`.  Only document sources can fail.
pub async fn load(
    extractor: &dyn DocumentExtractor,
    source: &LoadSource,
) -> Result<Script, ExtractionError> {
    match source {
        LoadSource::Text(raw) => Ok(load_from_text(raw)),
        LoadSource::Document(path) => load_from_document(extractor, path).await,
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Request sent from the UI to the load worker.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    /// Monotonic id so the UI can match the outcome to its request.
    pub id: u64,
    pub source: LoadSource,
}

/// Result delivered back to the UI.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub id: u64,
    pub source: LoadSource,
    pub result: Result<Script, ExtractionError>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
