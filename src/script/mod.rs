//! Script model — the ordered list of lines the reader steps through.
//!
//! A [`Script`] is built once per load and never edited afterwards.  Every
//! line is non-empty after trimming; blank source lines are dropped during
//! construction.
//!
//! # Quick start
//!
//! ```
//! use line_reader::script::{load_from_text, ParsedLine};
//!
//! let script = load_from_text("Alice: Hello there\nBob: Hi!\n\n  ");
//! assert_eq!(script.lines(), ["Alice: Hello there", "Bob: Hi!"]);
//!
//! let parsed = ParsedLine::parse(&script.lines()[0]);
//! assert_eq!(parsed.speaker, Some("Alice"));
//! assert_eq!(parsed.body, "Hello there");
//! ```

pub mod line;

pub use line::ParsedLine;

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

/// Ordered, immutable sequence of non-blank, trimmed lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    /// An empty script (nothing loaded).
    pub fn empty() -> Self {
        Self::default()
    }

    /// All lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// `true` when no lines were loaded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the last line, or `None` for an empty script.
    pub fn last_index(&self) -> Option<usize> {
        self.lines.len().checked_sub(1)
    }
}

// ---------------------------------------------------------------------------
// load_from_text
// ---------------------------------------------------------------------------

/// Split `raw` on newlines, trim each piece and drop the empty ones.
///
/// Never fails: empty or whitespace-only input yields an empty [`Script`].
/// Windows line endings are handled by the trim.
pub fn load_from_text(raw: &str) -> Script {
    let lines = raw
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    Script { lines }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
