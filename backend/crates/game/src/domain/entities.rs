//! Domain Entities

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{GameId, GameText, GameTitle};

/// Descriptive fields of a game, already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProfile {
    pub title: GameTitle,
    pub genre: GameText,
    pub developer: GameText,
    pub publisher: GameText,
    pub platforms: GameText,
    pub rating_esrb: GameText,
    /// Free text as submitted, e.g. "Nov 17, 2003"
    pub release_date: GameText,
}

/// Game entity - one stored catalog record
#[derive(Debug, Clone)]
pub struct Game {
    pub game_id: GameId,
    pub profile: GameProfile,
    pub created_at: DateTime<Utc>,
}

impl Game {
    /// Create a new game with a fresh id
    pub fn new(profile: GameProfile) -> Self {
        Self {
            game_id: GameId::new(),
            profile,
            created_at: Utc::now(),
        }
    }
}
