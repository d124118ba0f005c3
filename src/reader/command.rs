//! Navigation commands and their key bindings.
//!
//! Buttons and keys both produce a [`ReaderCommand`]; the reader handles
//! commands in one place ([`LineReader::dispatch`](super::LineReader::dispatch)).

use crate::config::KeyConfig;

/// Navigation request from any input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderCommand {
    Previous,
    Next,
}

// ---------------------------------------------------------------------------
// KeyBindings
// ---------------------------------------------------------------------------

/// Keys mapped to navigation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub previous: egui::Key,
    pub next: egui::Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            previous: egui::Key::ArrowLeft,
            next: egui::Key::ArrowRight,
        }
    }
}

impl KeyBindings {
    /// Resolve the key names in `config`, falling back to the arrow keys
    /// for any name that is not recognised.
    pub fn from_config(config: &KeyConfig) -> Self {
        let defaults = Self::default();
        Self {
            previous: resolve(&config.previous, defaults.previous),
            next: resolve(&config.next, defaults.next),
        }
    }

    /// The command bound to `key`, if any.
    pub fn command_for(&self, key: egui::Key) -> Option<ReaderCommand> {
        if key == self.previous {
            Some(ReaderCommand::Previous)
        } else if key == self.next {
            Some(ReaderCommand::Next)
        } else {
            None
        }
    }
}

fn resolve(name: &str, fallback: egui::Key) -> egui::Key {
    parse_key(name).unwrap_or_else(|| {
        log::warn!("keys: unknown key name {name:?}, using {fallback:?}");
        fallback
    })
}

// ---------------------------------------------------------------------------
// parse_key
// ---------------------------------------------------------------------------

/// Parse a key name from a config string into an [`egui::Key`].
///
/// Supports arrows, paging keys, a few named keys and single ASCII letters
/// (case-insensitive).  Returns `None` for unrecognised names.
///
/// ```
/// use line_reader::reader::parse_key;
///
/// assert_eq!(parse_key("ArrowLeft"), Some(egui::Key::ArrowLeft));
/// assert_eq!(parse_key("Right"),     Some(egui::Key::ArrowRight));
/// assert_eq!(parse_key("j"),         Some(egui::Key::J));
/// assert_eq!(parse_key("xyz"),       None);
/// ```
pub fn parse_key(key_str: &str) -> Option<egui::Key> {
    match key_str {
        // Arrows
        "ArrowLeft" | "LeftArrow" | "Left" => Some(egui::Key::ArrowLeft),
        "ArrowRight" | "RightArrow" | "Right" => Some(egui::Key::ArrowRight),
        "ArrowUp" | "UpArrow" | "Up" => Some(egui::Key::ArrowUp),
        "ArrowDown" | "DownArrow" | "Down" => Some(egui::Key::ArrowDown),

        // Paging / named
        "PageUp" => Some(egui::Key::PageUp),
        "PageDown" => Some(egui::Key::PageDown),
        "Home" => Some(egui::Key::Home),
        "End" => Some(egui::Key::End),
        "Space" => Some(egui::Key::Space),
        "Enter" | "Return" => Some(egui::Key::Enter),
        "Backspace" => Some(egui::Key::Backspace),
        "Tab" => Some(egui::Key::Tab),

        // Letter keys (case-insensitive)
        "A" | "a" => Some(egui::Key::A),
        "B" | "b" => Some(egui::Key::B),
        "C" | "c" => Some(egui::Key::C),
        "D" | "d" => Some(egui::Key::D),
        "E" | "e" => Some(egui::Key::E),
        "F" | "f" => Some(egui::Key::F),
        "G" | "g" => Some(egui::Key::G),
        "H" | "h" => Some(egui::Key::H),
        "I" | "i" => Some(egui::Key::I),
        "J" | "j" => Some(egui::Key::J),
        "K" | "k" => Some(egui::Key::K),
        "L" | "l" => Some(egui::Key::L),
        "M" | "m" => Some(egui::Key::M),
        "N" | "n" => Some(egui::Key::N),
        "O" | "o" => Some(egui::Key::O),
        "P" | "p" => Some(egui::Key::P),
        "Q" | "q" => Some(egui::Key::Q),
        "R" | "r" => Some(egui::Key::R),
        "S" | "s" => Some(egui::Key::S),
        "T" | "t" => Some(egui::Key::T),
        "U" | "u" => Some(egui::Key::U),
        "V" | "v" => Some(egui::Key::V),
        "W" | "w" => Some(egui::Key::W),
        "X" | "x" => Some(egui::Key::X),
        "Y" | "y" => Some(egui::Key::Y),
        "Z" | "z" => Some(egui::Key::Z),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_arrow_aliases() {
        assert_eq!(parse_key("ArrowLeft"), Some(egui::Key::ArrowLeft));
        assert_eq!(parse_key("LeftArrow"), Some(egui::Key::ArrowLeft));
        assert_eq!(parse_key("Left"), Some(egui::Key::ArrowLeft));
        assert_eq!(parse_key("Right"), Some(egui::Key::ArrowRight));
    }

    #[test]
    fn parse_letter_keys_case_insensitive() {
        assert_eq!(parse_key("K"), Some(egui::Key::K));
        assert_eq!(parse_key("k"), Some(egui::Key::K));
    }

    #[test]
    fn parse_unknown_key_returns_none() {
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("Ctrl+V"), None);
    }

    #[test]
    fn default_bindings_are_arrows() {
        let keys = KeyBindings::from_config(&KeyConfig::default());
        assert_eq!(keys.command_for(egui::Key::ArrowLeft), Some(ReaderCommand::Previous));
        assert_eq!(keys.command_for(egui::Key::ArrowRight), Some(ReaderCommand::Next));
        assert_eq!(keys.command_for(egui::Key::ArrowUp), None);
    }

    #[test]
    fn unknown_names_fall_back_to_arrows() {
        let config = KeyConfig {
            previous: "Hyper+Q".into(),
            next: "PageDown".into(),
        };
        let keys = KeyBindings::from_config(&config);
        assert_eq!(keys.previous, egui::Key::ArrowLeft);
        assert_eq!(keys.next, egui::Key::PageDown);
    }
}
