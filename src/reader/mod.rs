//! The line reader state machine.
//!
//! [`LineReader`] owns the loaded [`Script`], the current position and the
//! two synchronous collaborators (speech and position store).  It lives on
//! the UI thread; document extraction happens elsewhere and hands a finished
//! [`Script`] to [`LineReader::load_script`].
//!
//! # Lifecycle
//!
//! ```text
//! new()  ── position seeded from PositionStore (absent → 0)
//!   │
//!   ▼
//! load_script(script) ── position = 0 ──▶ render()
//!   │                                        │
//!   │        dispatch(Previous | Next) ──────┤
//!   │                                        ▼
//!   └──────────────────────── persist index, speak line
//! ```

pub mod command;
pub mod view;

use crate::script::Script;
use crate::speech::SpeechService;
use crate::store::PositionStore;

pub use command::{parse_key, KeyBindings, ReaderCommand};
pub use view::{Display, RenderedLine, RenderedView, NO_SCRIPT_MESSAGE};

// ---------------------------------------------------------------------------
// LineReader
// ---------------------------------------------------------------------------

/// Script + current position, with rendering and navigation.
pub struct LineReader {
    script: Script,
    position: usize,
    /// Index restored at startup, applied to the first load when resuming.
    resume_at: Option<usize>,
    speech: Box<dyn SpeechService>,
    store: Box<dyn PositionStore>,
}

impl LineReader {
    /// Create a reader with an empty script.
    ///
    /// The position is seeded from `store` (or 0).  When `resume_on_load` is
    /// set, the first successful load starts at that seeded position instead
    /// of the first line.
    pub fn new(
        speech: Box<dyn SpeechService>,
        store: Box<dyn PositionStore>,
        resume_on_load: bool,
    ) -> Self {
        let restored = store.load();
        if let Some(index) = restored {
            log::info!("reader: restored position {index}");
        }

        Self {
            script: Script::empty(),
            position: restored.unwrap_or(0),
            resume_at: if resume_on_load { restored } else { None },
            speech,
            store,
        }
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Current zero-based position.  Only meaningful when a script is
    /// loaded; may exceed the script until the next render clamps it.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Replace the script, reset the position and render.
    ///
    /// A pending resume index is only consumed by a non-empty script.
    pub fn load_script(&mut self, script: Script) -> RenderedView {
        log::info!("reader: loaded {} line(s)", script.len());
        self.position = if script.is_empty() {
            0
        } else {
            self.resume_at.take().unwrap_or(0)
        };
        self.script = script;
        self.render()
    }

    /// Render the current line: persist the position and speak the line.
    ///
    /// With an empty script this only returns the placeholder view; nothing
    /// is spoken or persisted.
    pub fn render(&mut self) -> RenderedView {
        let Some(last) = self.script.last_index() else {
            return RenderedView::no_script();
        };

        self.position = self.position.min(last);

        let line = match self.script.get(self.position) {
            Some(line) => line.to_owned(),
            None => return RenderedView::no_script(),
        };

        let view = RenderedView {
            display: Display::Line(RenderedLine::new(self.position, self.script.len(), &line)),
            previous_enabled: self.position > 0,
            next_enabled: self.position < last,
        };

        self.store.save(self.position);
        self.speech.speak(&line);

        view
    }

    /// Step back one line.  Returns `None` when already at the start.
    pub fn previous(&mut self) -> Option<RenderedView> {
        if self.script.is_empty() || self.position == 0 {
            return None;
        }
        self.position = self.position.min(self.script.len()) - 1;
        log::debug!("reader: previous → {}", self.position);
        Some(self.render())
    }

    /// Step forward one line.  Returns `None` at the last line or when no
    /// script is loaded.
    pub fn next(&mut self) -> Option<RenderedView> {
        let last = self.script.last_index()?;
        if self.position >= last {
            return None;
        }
        self.position += 1;
        log::debug!("reader: next → {}", self.position);
        Some(self.render())
    }

    /// Route a navigation command from any input source.
    pub fn dispatch(&mut self, command: ReaderCommand) -> Option<RenderedView> {
        match command {
            ReaderCommand::Previous => self.previous(),
            ReaderCommand::Next => self.next(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::load_from_text;
    use crate::speech::{RecordingSpeech, SpeechEvent};
    use crate::store::MemoryPositionStore;

    fn reader_with(
        store: &MemoryPositionStore,
        resume: bool,
    ) -> (LineReader, RecordingSpeech) {
        let speech = RecordingSpeech::default();
        let reader = LineReader::new(Box::new(speech.clone()), Box::new(store.clone()), resume);
        (reader, speech)
    }

    const SCENE: &str = "Alice: Hello there\nBob: Hi!\n\n  ";

    // ---- Render ---

    #[test]
    fn scenario_first_render_shows_speaker_line() {
        let store = MemoryPositionStore::new();
        let (mut reader, speech) = reader_with(&store, false);

        let view = reader.load_script(load_from_text(SCENE));

        assert_eq!(view.display_text(), "(1/2) Alice: Hello there");
        assert_eq!(view.line().unwrap().speaker.as_deref(), Some("Alice"));
        assert!(!view.previous_enabled);
        assert!(view.next_enabled);
        assert_eq!(store.load(), Some(0));
        assert_eq!(speech.spoken(), vec!["Alice: Hello there".to_string()]);
    }

    #[test]
    fn scenario_next_reaches_last_line() {
        let store = MemoryPositionStore::new();
        let (mut reader, _speech) = reader_with(&store, false);
        reader.load_script(load_from_text(SCENE));

        let view = reader.next().expect("moved");

        assert_eq!(view.display_text(), "(2/2) Bob: Hi!");
        assert!(view.previous_enabled);
        assert!(!view.next_enabled);
        assert_eq!(store.load(), Some(1));
    }

    #[test]
    fn line_without_colon_has_no_speaker() {
        let store = MemoryPositionStore::new();
        let (mut reader, _speech) = reader_with(&store, false);

        let view = reader.load_script(load_from_text("The wind howls.\nAlice: Brr."));

        assert_eq!(view.display_text(), "(1/2) The wind howls.");
        assert_eq!(view.line().unwrap().speaker, None);
    }

    #[test]
    fn multiple_colons_split_on_first() {
        let store = MemoryPositionStore::new();
        let (mut reader, _speech) = reader_with(&store, false);

        let view = reader.load_script(load_from_text("Narrator: Act I: The Beginning"));
        let line = view.line().unwrap();

        assert_eq!(line.speaker.as_deref(), Some("Narrator"));
        assert_eq!(line.body, "Act I: The Beginning");
    }

    #[test]
    fn render_is_idempotent_for_display_and_store() {
        let store = MemoryPositionStore::new();
        let (mut reader, speech) = reader_with(&store, false);
        reader.load_script(load_from_text(SCENE));
        reader.next();

        let first = reader.render();
        let stored_first = store.load();
        let second = reader.render();

        assert_eq!(first, second);
        assert_eq!(stored_first, store.load());
        // Each render re-speaks, cancelling the previous utterance first.
        let events = speech.events.lock().unwrap().clone();
        let tail = &events[events.len() - 4..];
        assert_eq!(
            tail,
            [
                SpeechEvent::Cancel,
                SpeechEvent::Start("Bob: Hi!".into()),
                SpeechEvent::Cancel,
                SpeechEvent::Start("Bob: Hi!".into()),
            ]
        );
    }

    #[test]
    fn single_line_script_disables_both_controls() {
        let store = MemoryPositionStore::new();
        let (mut reader, _speech) = reader_with(&store, false);

        let view = reader.load_script(load_from_text("   only line   \n"));

        assert_eq!(view.display_text(), "(1/1) only line");
        assert!(!view.previous_enabled);
        assert!(!view.next_enabled);
    }

    #[test]
    fn empty_script_shows_placeholder_without_side_effects() {
        let store = MemoryPositionStore::new();
        let (mut reader, speech) = reader_with(&store, false);

        let view = reader.load_script(load_from_text("\n  \n"));

        assert_eq!(view.display_text(), NO_SCRIPT_MESSAGE);
        assert!(!view.previous_enabled);
        assert!(!view.next_enabled);
        assert_eq!(store.write_count(), 0);
        assert!(speech.events.lock().unwrap().is_empty());
    }

    // ---- Navigation ---

    #[test]
    fn previous_at_start_is_a_no_op() {
        let store = MemoryPositionStore::new();
        let (mut reader, speech) = reader_with(&store, false);
        reader.load_script(load_from_text(SCENE));
        let writes = store.write_count();

        assert!(reader.previous().is_none());
        assert_eq!(reader.position(), 0);
        assert_eq!(store.write_count(), writes);
        assert_eq!(speech.spoken().len(), 1);
    }

    #[test]
    fn next_at_end_is_a_no_op() {
        let store = MemoryPositionStore::new();
        let (mut reader, _speech) = reader_with(&store, false);
        reader.load_script(load_from_text(SCENE));
        reader.next();

        assert!(reader.next().is_none());
        assert_eq!(reader.position(), 1);
    }

    #[test]
    fn navigation_on_empty_script_is_a_no_op() {
        let store = MemoryPositionStore::new();
        let (mut reader, speech) = reader_with(&store, false);

        assert!(reader.next().is_none());
        assert!(reader.previous().is_none());
        assert!(speech.events.lock().unwrap().is_empty());
    }

    #[test]
    fn previous_moves_back_and_renders() {
        let store = MemoryPositionStore::new();
        let (mut reader, speech) = reader_with(&store, false);
        reader.load_script(load_from_text("one\ntwo\nthree"));
        reader.next();
        reader.next();

        let view = reader.previous().expect("moved");

        assert_eq!(view.display_text(), "(2/3) two");
        assert!(view.previous_enabled);
        assert!(view.next_enabled);
        assert_eq!(store.load(), Some(1));
        assert_eq!(speech.spoken(), vec!["one", "two", "three", "two"]);
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let store_a = MemoryPositionStore::new();
        let store_b = MemoryPositionStore::new();
        let (mut direct, _) = reader_with(&store_a, false);
        let (mut routed, _) = reader_with(&store_b, false);
        direct.load_script(load_from_text("a\nb\nc"));
        routed.load_script(load_from_text("a\nb\nc"));

        assert_eq!(direct.next(), routed.dispatch(ReaderCommand::Next));
        assert_eq!(direct.next(), routed.dispatch(ReaderCommand::Next));
        assert_eq!(direct.next(), routed.dispatch(ReaderCommand::Next));
        assert_eq!(direct.previous(), routed.dispatch(ReaderCommand::Previous));
        assert_eq!(store_a.load(), store_b.load());
    }

    // ---- Load / persistence ---

    #[test]
    fn reload_resets_position_and_overwrites_store() {
        let store = MemoryPositionStore::new();
        let (mut reader, _speech) = reader_with(&store, false);
        reader.load_script(load_from_text("one\ntwo\nthree"));
        reader.next();
        reader.next();
        assert_eq!(store.load(), Some(2));

        let view = reader.load_script(load_from_text("fresh\nstart"));

        assert_eq!(reader.position(), 0);
        assert_eq!(view.display_text(), "(1/2) fresh");
        assert_eq!(store.load(), Some(0));
    }

    #[test]
    fn restored_position_seeds_reader() {
        let store = MemoryPositionStore::with_index(4);
        let (reader, _speech) = reader_with(&store, false);
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn load_ignores_restored_position_by_default() {
        let store = MemoryPositionStore::with_index(2);
        let (mut reader, _speech) = reader_with(&store, false);

        let view = reader.load_script(load_from_text("a\nb\nc\nd"));
        assert_eq!(view.display_text(), "(1/4) a");
    }

    #[test]
    fn resume_on_load_applies_to_first_load_only() {
        let store = MemoryPositionStore::with_index(2);
        let (mut reader, _speech) = reader_with(&store, true);

        let first = reader.load_script(load_from_text("a\nb\nc\nd"));
        assert_eq!(first.display_text(), "(3/4) c");

        let second = reader.load_script(load_from_text("x\ny"));
        assert_eq!(second.display_text(), "(1/2) x");
    }

    #[test]
    fn empty_load_does_not_consume_resume() {
        let store = MemoryPositionStore::with_index(2);
        let (mut reader, _speech) = reader_with(&store, true);

        let blank = reader.load_script(Script::empty());
        assert_eq!(blank.display_text(), NO_SCRIPT_MESSAGE);

        let first = reader.load_script(load_from_text("a\nb\nc\nd"));
        assert_eq!(first.display_text(), "(3/4) c");

        let second = reader.load_script(load_from_text("x\ny"));
        assert_eq!(second.display_text(), "(1/2) x");
    }

    #[test]
    fn out_of_range_restored_position_is_clamped() {
        let store = MemoryPositionStore::with_index(40);
        let (mut reader, _speech) = reader_with(&store, true);

        let view = reader.load_script(load_from_text("a\nb\nc"));

        assert_eq!(view.display_text(), "(3/3) c");
        assert!(!view.next_enabled);
        assert_eq!(store.load(), Some(2));
    }

    #[test]
    fn empty_load_keeps_restored_index_unwritten() {
        let store = MemoryPositionStore::with_index(5);
        let (mut reader, _speech) = reader_with(&store, false);

        reader.load_script(Script::empty());

        assert_eq!(store.load(), Some(5));
        assert_eq!(store.write_count(), 0);
    }
}
