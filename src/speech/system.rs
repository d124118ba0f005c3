//! Platform text-to-speech via the `tts` crate.
//!
//! Backends: Speech Dispatcher on Linux, AVFoundation on macOS, WinRT on
//! Windows.  The handle is not shared across threads; it lives on the UI
//! thread next to the reader.

use tts::{Tts, UtteranceId};

use super::{SpeechError, SpeechService};
use crate::config::SpeechConfig;

/// Speech backed by the operating system's TTS engine.
pub struct SystemSpeech {
    tts: Tts,
    /// Utterance started by the last `start` call, cleared on `cancel`.
    active: Option<UtteranceId>,
    can_stop: bool,
}

impl std::fmt::Debug for SystemSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemSpeech")
            .field("active", &self.active)
            .field("can_stop", &self.can_stop)
            .finish_non_exhaustive()
    }
}

impl SystemSpeech {
    /// Initialise the default platform backend.
    ///
    /// # Errors
    ///
    /// [`SpeechError::Unavailable`] when no backend can be created (e.g.
    /// Speech Dispatcher is not running).
    pub fn new(config: &SpeechConfig) -> Result<Self, SpeechError> {
        let mut tts = Tts::default().map_err(|e| SpeechError::Unavailable(e.to_string()))?;
        let features = tts.supported_features();

        if let Some(rate) = config.rate {
            if features.rate {
                let clamped = rate.clamp(tts.min_rate(), tts.max_rate());
                if let Err(e) = tts.set_rate(clamped) {
                    log::warn!("speech: cannot set rate {clamped}: {e}");
                }
            } else {
                log::warn!("speech: backend does not support changing the rate");
            }
        }

        Ok(Self {
            tts,
            active: None,
            can_stop: features.stop,
        })
    }
}

impl SpeechService for SystemSpeech {
    fn cancel(&mut self) {
        if self.can_stop {
            if let Err(e) = self.tts.stop() {
                log::warn!("speech: stop failed: {e}");
            }
        }
        self.active = None;
    }

    fn start(&mut self, text: &str) {
        // `interrupt = true` covers backends without a separate stop call.
        match self.tts.speak(text, true) {
            Ok(id) => self.active = id,
            Err(e) => log::warn!("speech: {}", SpeechError::Request(e.to_string())),
        }
    }
}
