//! Persisting the reading position across sessions.
//!
//! [`PositionStore`] holds a single integer: the index of the last rendered
//! line.  Saving is fire-and-forget; loading degrades to `None` on any
//! problem so startup never fails because of stale state.

pub mod file;

#[cfg(test)]
use std::sync::{Arc, Mutex};

use thiserror::Error;

pub use file::FilePositionStore;

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// Failures inside a store implementation.  Never surfaced to the reader.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("state file is not valid TOML: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("cannot encode state: {0}")]
    Encode(#[from] toml::ser::Error),
}

// ---------------------------------------------------------------------------
// PositionStore trait
// ---------------------------------------------------------------------------

/// Key-value persistence for the current line index.
pub trait PositionStore {
    /// Overwrite the stored index.  Errors are handled internally.
    fn save(&mut self, index: usize);

    /// The stored index, or `None` when nothing (valid) was stored.
    fn load(&self) -> Option<usize>;
}

// ---------------------------------------------------------------------------
// MemoryPositionStore
// ---------------------------------------------------------------------------

/// In-process store.  Clones share the same slot, so a test can keep one
/// handle and give the other to the reader.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryPositionStore {
    slot: Arc<Mutex<Option<usize>>>,
    writes: Arc<Mutex<usize>>,
}

#[cfg(test)]
impl MemoryPositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `index`.
    pub fn with_index(index: usize) -> Self {
        let store = Self::default();
        if let Ok(mut slot) = store.slot.lock() {
            *slot = Some(index);
        }
        store
    }

    /// Number of `save` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.lock().map(|w| *w).unwrap_or(0)
    }
}

#[cfg(test)]
impl PositionStore for MemoryPositionStore {
    fn save(&mut self, index: usize) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(index);
        }
        if let Ok(mut writes) = self.writes.lock() {
            *writes += 1;
        }
    }

    fn load(&self) -> Option<usize> {
        self.slot.lock().ok().and_then(|slot| *slot)
    }
}
