//! Display model produced by every render.
//!
//! The UI draws a [`RenderedView`] without looking at the reader again;
//! tests compare [`RenderedView::display_text`] against the expected string.

use crate::script::ParsedLine;

/// Placeholder shown while no script is loaded.
pub const NO_SCRIPT_MESSAGE: &str = "No script loaded.";

// ---------------------------------------------------------------------------
// RenderedLine
// ---------------------------------------------------------------------------

/// One script line prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Zero-based index of the line.
    pub position: usize,
    /// Number of lines in the script.
    pub total: usize,
    /// Speaker label (text before the first colon), shown highlighted.
    pub speaker: Option<String>,
    /// Line body; the whole line when there is no speaker.
    pub body: String,
}

impl RenderedLine {
    pub(crate) fn new(position: usize, total: usize, line: &str) -> Self {
        let parsed = ParsedLine::parse(line);
        Self {
            position,
            total,
            speaker: parsed.speaker.map(str::to_owned),
            body: parsed.body.to_owned(),
        }
    }

    /// The `(N/total)` counter, one-based.
    pub fn counter(&self) -> String {
        format!("({}/{})", self.position + 1, self.total)
    }

    /// Speaker label with its trailing colon, e.g. `"Alice:"`.
    pub fn speaker_label(&self) -> Option<String> {
        self.speaker.as_ref().map(|s| format!("{s}:"))
    }

    /// Plain-text rendering: `"(N/total) speaker: body"` or
    /// `"(N/total) line"`.
    pub fn display_text(&self) -> String {
        match self.speaker_label() {
            Some(label) => format!("{} {} {}", self.counter(), label, self.body),
            None => format!("{} {}", self.counter(), self.body),
        }
    }
}

// ---------------------------------------------------------------------------
// Display / RenderedView
// ---------------------------------------------------------------------------

/// What the display region shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Display {
    /// Empty script: placeholder message.
    NoScript,
    /// The current line.
    Line(RenderedLine),
}

/// Result of a render: display content plus navigation affordance state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub display: Display,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl RenderedView {
    /// The view before anything has been loaded.
    pub fn no_script() -> Self {
        Self {
            display: Display::NoScript,
            previous_enabled: false,
            next_enabled: false,
        }
    }

    /// Plain-text form of the display region.
    pub fn display_text(&self) -> String {
        match &self.display {
            Display::NoScript => NO_SCRIPT_MESSAGE.to_string(),
            Display::Line(line) => line.display_text(),
        }
    }

    /// The rendered line, if a script is loaded.
    pub fn line(&self) -> Option<&RenderedLine> {
        match &self.display {
            Display::Line(line) => Some(line),
            Display::NoScript => None,
        }
    }
}

impl Default for RenderedView {
    fn default() -> Self {
        Self::no_script()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaker_line_text() {
        let line = RenderedLine::new(0, 2, "Alice: Hello there");
        assert_eq!(line.counter(), "(1/2)");
        assert_eq!(line.speaker_label().as_deref(), Some("Alice:"));
        assert_eq!(line.display_text(), "(1/2) Alice: Hello there");
    }

    #[test]
    fn plain_line_is_verbatim() {
        let line = RenderedLine::new(3, 5, "The wind howls.");
        assert_eq!(line.speaker, None);
        assert_eq!(line.display_text(), "(4/5) The wind howls.");
    }

    #[test]
    fn later_colons_stay_in_body() {
        let line = RenderedLine::new(0, 1, "Narrator: Act I: The Beginning");
        assert_eq!(line.speaker.as_deref(), Some("Narrator"));
        assert_eq!(line.body, "Act I: The Beginning");
        assert_eq!(line.display_text(), "(1/1) Narrator: Act I: The Beginning");
    }

    #[test]
    fn no_script_view_is_inert() {
        let view = RenderedView::no_script();
        assert_eq!(view.display_text(), NO_SCRIPT_MESSAGE);
        assert!(!view.previous_enabled);
        assert!(!view.next_enabled);
        assert!(view.line().is_none());
    }
}
