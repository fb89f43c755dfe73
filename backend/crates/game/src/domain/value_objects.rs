//! Domain Value Objects
//!
//! Validated text fields of a game record.

use std::fmt;

use crate::error::{GameError, GameResult};

pub use kernel::id::GameId;

/// Descriptive free-text field (genre, developer, ...)
///
/// Surrounding whitespace is trimmed; an absent value becomes the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameText(String);

impl GameText {
    pub fn parse(field: &'static str, raw: Option<String>, max_chars: usize) -> GameResult<Self> {
        let value = raw.map(|s| s.trim().to_owned()).unwrap_or_default();
        if value.chars().count() > max_chars {
            return Err(GameError::InvalidField {
                field,
                reason: format!("must be at most {} characters", max_chars),
            });
        }
        Ok(Self(value))
    }

    /// Wrap a value read back from storage. No validation.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GameText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Game title: a [`GameText`] that must not be blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTitle(GameText);

impl GameTitle {
    pub fn parse(raw: Option<String>, max_chars: usize) -> GameResult<Self> {
        let text = GameText::parse("title", raw, max_chars)?;
        if text.is_empty() {
            return Err(GameError::InvalidField {
                field: "title",
                reason: "is required".to_string(),
            });
        }
        Ok(Self(text))
    }

    pub fn from_stored(value: String) -> Self {
        Self(GameText::from_stored(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_inner(self) -> String {
        self.0.into_inner()
    }
}

impl fmt::Display for GameTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_trimmed() {
        let text = GameText::parse("genre", Some("  racing/driving \n".into()), 64).unwrap();
        assert_eq!(text.as_str(), "racing/driving");
    }

    #[test]
    fn test_absent_text_is_empty() {
        let text = GameText::parse("publisher", None, 64).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_text_length_counts_chars() {
        // 4 chars, 12 bytes
        assert!(GameText::parse("platforms", Some("ゲーム機".into()), 4).is_ok());

        let err = GameText::parse("platforms", Some("GameCube".into()), 4).unwrap_err();
        match err {
            GameError::InvalidField { field, reason } => {
                assert_eq!(field, "platforms");
                assert_eq!(reason, "must be at most 4 characters");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_title_required() {
        assert!(matches!(
            GameTitle::parse(None, 64),
            Err(GameError::InvalidField { field: "title", .. })
        ));
        assert!(matches!(
            GameTitle::parse(Some("   ".into()), 64),
            Err(GameError::InvalidField { field: "title", .. })
        ));

        let title = GameTitle::parse(Some("Mario Kart: Double Dash!!".into()), 64).unwrap();
        assert_eq!(title.to_string(), "Mario Kart: Double Dash!!");
    }
}
