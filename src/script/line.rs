//! Speaker-label parsing for a single script line.

/// Borrowed view of a line split into an optional speaker label and a body.
///
/// The split happens on the **first** colon only; any later colons stay in
/// the body.  Without a colon the whole line is the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// Text before the first colon, untouched.
    pub speaker: Option<&'a str>,
    /// Remainder after the first colon, trimmed; or the whole line when
    /// there is no speaker.
    pub body: &'a str,
}

impl<'a> ParsedLine<'a> {
    /// Parse `line` into speaker and body.
    pub fn parse(line: &'a str) -> Self {
        match line.split_once(':') {
            Some((speaker, rest)) => Self {
                speaker: Some(speaker),
                body: rest.trim(),
            },
            None => Self {
                speaker: None,
                body: line,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_speaker_and_body() {
        let parsed = ParsedLine::parse("Alice: Hello there");
        assert_eq!(parsed.speaker, Some("Alice"));
        assert_eq!(parsed.body, "Hello there");
    }

    #[test]
    fn no_colon_means_no_speaker() {
        let parsed = ParsedLine::parse("The wind howls.");
        assert_eq!(parsed.speaker, None);
        assert_eq!(parsed.body, "The wind howls.");
    }

    #[test]
    fn only_first_colon_splits() {
        let parsed = ParsedLine::parse("Narrator: Act I: The Beginning");
        assert_eq!(parsed.speaker, Some("Narrator"));
        assert_eq!(parsed.body, "Act I: The Beginning");
    }

    #[test]
    fn empty_body_after_colon() {
        let parsed = ParsedLine::parse("BOB:");
        assert_eq!(parsed.speaker, Some("BOB"));
        assert_eq!(parsed.body, "");
    }

    #[test]
    fn leading_colon_gives_empty_speaker() {
        let parsed = ParsedLine::parse(": aside");
        assert_eq!(parsed.speaker, Some(""));
        assert_eq!(parsed.body, "aside");
    }
}
