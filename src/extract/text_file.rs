//! Plain UTF-8 text files, treated as a single page.

use std::path::Path;

use async_trait::async_trait;

use super::{DocumentExtractor, ExtractionError};

/// Reads `.txt` / `.md` / `.fountain` files as one page of text.
#[derive(Debug, Clone, Default)]
pub struct TextFileExtractor;

impl TextFileExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentExtractor for TextFileExtractor {
    async fn extract_pages(&self, path: &Path) -> Result<Vec<String>, ExtractionError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ExtractionError::Read(format!("{}: {e}", path.display())))?;

        let text = String::from_utf8(bytes)
            .map_err(|e| ExtractionError::Parse(format!("{} is not UTF-8: {e}", path.display())))?;

        Ok(vec![text])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn whole_file_is_one_page() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "one\ntwo\n").expect("write");

        let pages = TextFileExtractor::new().extract_pages(&path).await.unwrap();
        assert_eq!(pages, vec!["one\ntwo\n".to_string()]);
    }

    #[tokio::test]
    async fn invalid_utf8_is_a_parse_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).expect("write");

        let err = TextFileExtractor::new().extract_pages(&path).await.unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(_)));
    }

    #[tokio::test]
    async fn unreadable_path_is_a_read_error() {
        let dir = tempdir().expect("temp dir");
        // A directory cannot be read as a file.
        let err = TextFileExtractor::new()
            .extract_pages(dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Read(_)));
    }
}
