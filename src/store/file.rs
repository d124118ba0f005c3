//! TOML-file position store in the platform data directory.
//!
//! File format (`state.toml`):
//!
//! ```toml
//! line_reader_index = 12
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{PositionStore, StoreError};
use crate::config::AppPaths;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredState {
    line_reader_index: Option<usize>,
}

/// [`PositionStore`] backed by a small TOML file.
#[derive(Debug, Clone)]
pub struct FilePositionStore {
    path: PathBuf,
}

impl FilePositionStore {
    /// Store at the platform-appropriate `state.toml`.
    pub fn new() -> Self {
        Self::at(AppPaths::new().state_file)
    }

    /// Store at an explicit path (useful for tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_save(&self, index: usize) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let state = StoredState {
            line_reader_index: Some(index),
        };
        std::fs::write(&self.path, toml::to_string(&state)?)?;
        Ok(())
    }

    fn try_load(&self) -> Result<Option<usize>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let state: StoredState = toml::from_str(&content)?;
        Ok(state.line_reader_index)
    }
}

impl Default for FilePositionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionStore for FilePositionStore {
    fn save(&mut self, index: usize) {
        if let Err(e) = self.try_save(index) {
            log::warn!("store: cannot save position to {}: {e}", self.path.display());
        }
    }

    fn load(&self) -> Option<usize> {
        match self.try_load() {
            Ok(index) => index,
            Err(e) => {
                log::warn!("store: ignoring {}: {e}", self.path.display());
                None
            }
        }
    }
}
