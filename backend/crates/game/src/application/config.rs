//! Application Configuration
//!
//! Configuration for the Game application layer.

/// Game application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Upper bound on each text field, counted in characters
    pub max_field_chars: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_field_chars: 256,
        }
    }
}

impl GameConfig {
    pub fn with_max_field_chars(max_field_chars: usize) -> Self {
        Self { max_field_chars }
    }
}
