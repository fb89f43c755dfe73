//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::CreateGameInput;
use crate::domain::entities::Game;
use crate::error::{GameError, GameResult};

/// Request for POST /api/games
///
/// Unknown keys are ignored; validation happens in the use case.
/// Build it through `TryFrom<Value>` so only JSON objects are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGameRequest {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub platforms: Option<String>,
    #[serde(rename = "ratingESRB")]
    pub rating_esrb: Option<String>,
    #[serde(rename = "releaseDate")]
    pub release_date: Option<String>,
}

impl TryFrom<Value> for CreateGameRequest {
    type Error = GameError;

    // The derived deserializer also reads arrays positionally.
    fn try_from(value: Value) -> GameResult<Self> {
        if !value.is_object() {
            return Err(GameError::MalformedPayload(
                "expected a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| GameError::MalformedPayload(e.to_string()))
    }
}

impl From<CreateGameRequest> for CreateGameInput {
    fn from(req: CreateGameRequest) -> Self {
        Self {
            title: req.title,
            genre: req.genre,
            developer: req.developer,
            publisher: req.publisher,
            platforms: req.platforms,
            rating_esrb: req.rating_esrb,
            release_date: req.release_date,
        }
    }
}

/// A stored game, as returned by every read and by create
#[derive(Debug, Clone, Serialize)]
pub struct GameResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub genre: String,
    pub developer: String,
    pub publisher: String,
    pub platforms: String,
    #[serde(rename = "ratingESRB")]
    pub rating_esrb: String,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        let profile = game.profile;
        Self {
            id: game.game_id.to_string(),
            title: profile.title.into_inner(),
            genre: profile.genre.into_inner(),
            developer: profile.developer.into_inner(),
            publisher: profile.publisher.into_inner(),
            platforms: profile.platforms.into_inner(),
            rating_esrb: profile.rating_esrb.into_inner(),
            release_date: profile.release_date.into_inner(),
            created_at: game.created_at,
        }
    }
}
