//! Reading lines aloud.
//!
//! [`SpeechService`] is the seam the reader talks to.  Its provided
//! [`speak`](SpeechService::speak) method always cancels the current
//! utterance before starting the next one, so at most one utterance is ever
//! active regardless of the backend.
//!
//! * [`SystemSpeech`] — platform TTS through the `tts` crate.
//! * [`SilentSpeech`] — no-op used when speech is disabled or unavailable.
//!
//! Use [`from_config`] to pick one; it never fails.

pub mod system;

use thiserror::Error;

use crate::config::SpeechConfig;

pub use system::SystemSpeech;

// ---------------------------------------------------------------------------
// SpeechError
// ---------------------------------------------------------------------------

/// Errors from the speech backend.  None of them reach the reader: they are
/// logged and the line is simply not spoken.
#[derive(Debug, Clone, Error)]
pub enum SpeechError {
    /// No usable TTS backend on this platform.
    #[error("speech backend unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected a request.
    #[error("speech request failed: {0}")]
    Request(String),
}

// ---------------------------------------------------------------------------
// SpeechService trait
// ---------------------------------------------------------------------------

/// Speaks one line at a time.
///
/// # Contract
///
/// - [`cancel`](Self::cancel) stops any playing or queued utterance.
/// - [`start`](Self::start) begins speaking `text` in the background.
/// - [`speak`](Self::speak) is cancel-then-start; implementors should not
///   override it.
pub trait SpeechService {
    /// Stop the active utterance, if any.
    fn cancel(&mut self);

    /// Begin speaking `text`.
    fn start(&mut self, text: &str);

    /// Cancel whatever is playing, then speak `text`.
    fn speak(&mut self, text: &str) {
        self.cancel();
        self.start(text);
    }
}

// ---------------------------------------------------------------------------
// SilentSpeech
// ---------------------------------------------------------------------------

/// Speech backend that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSpeech;

impl SpeechService for SilentSpeech {
    fn cancel(&mut self) {}

    fn start(&mut self, _text: &str) {}
}

// ---------------------------------------------------------------------------
// from_config
// ---------------------------------------------------------------------------

/// Build the speech backend described by `config`.
///
/// Falls back to [`SilentSpeech`] when speech is disabled or the platform
/// backend cannot be initialised.
pub fn from_config(config: &SpeechConfig) -> Box<dyn SpeechService> {
    if !config.enabled {
        log::info!("speech: disabled in settings");
        return Box::new(SilentSpeech);
    }

    match SystemSpeech::new(config) {
        Ok(speech) => {
            log::info!("speech: using platform TTS backend");
            Box::new(speech)
        }
        Err(e) => {
            log::warn!("speech: {e}; lines will not be spoken");
            Box::new(SilentSpeech)
        }
    }
}

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

/// One call observed by [`RecordingSpeech`].
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Cancel,
    Start(String),
}

/// Records every call into a shared log the test keeps a handle to.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingSpeech {
    pub events: std::sync::Arc<std::sync::Mutex<Vec<SpeechEvent>>>,
}

#[cfg(test)]
impl RecordingSpeech {
    /// Lines passed to `start`, in order.
    pub fn spoken(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                SpeechEvent::Start(text) => Some(text.clone()),
                SpeechEvent::Cancel => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl SpeechService for RecordingSpeech {
    fn cancel(&mut self) {
        self.events.lock().unwrap().push(SpeechEvent::Cancel);
    }

    fn start(&mut self, text: &str) {
        self.events
            .lock()
            .unwrap()
            .push(SpeechEvent::Start(text.to_string()));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
