//! Create Game Use Case

use std::sync::Arc;

use crate::application::config::GameConfig;
use crate::domain::entities::{Game, GameProfile};
use crate::domain::repository::GameRepository;
use crate::domain::value_objects::{GameText, GameTitle};
use crate::error::{GameError, GameResult};

/// Create game input. Every field is optional at this point.
#[derive(Debug, Clone, Default)]
pub struct CreateGameInput {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub platforms: Option<String>,
    pub rating_esrb: Option<String>,
    pub release_date: Option<String>,
}

impl CreateGameInput {
    /// True when no field carries any non-whitespace content
    pub fn is_blank(&self) -> bool {
        [
            &self.title,
            &self.genre,
            &self.developer,
            &self.publisher,
            &self.platforms,
            &self.rating_esrb,
            &self.release_date,
        ]
        .iter()
        .all(|field| field.as_deref().is_none_or(|s| s.trim().is_empty()))
    }

    fn into_profile(self, max_chars: usize) -> GameResult<GameProfile> {
        Ok(GameProfile {
            title: GameTitle::parse(self.title, max_chars)?,
            genre: GameText::parse("genre", self.genre, max_chars)?,
            developer: GameText::parse("developer", self.developer, max_chars)?,
            publisher: GameText::parse("publisher", self.publisher, max_chars)?,
            platforms: GameText::parse("platforms", self.platforms, max_chars)?,
            rating_esrb: GameText::parse("ratingESRB", self.rating_esrb, max_chars)?,
            release_date: GameText::parse("releaseDate", self.release_date, max_chars)?,
        })
    }
}

/// Create game use case
pub struct CreateGameUseCase<R>
where
    R: GameRepository,
{
    game_repo: Arc<R>,
    config: Arc<GameConfig>,
}

impl<R> CreateGameUseCase<R>
where
    R: GameRepository,
{
    pub fn new(game_repo: Arc<R>, config: Arc<GameConfig>) -> Self {
        Self { game_repo, config }
    }

    pub async fn execute(&self, input: CreateGameInput) -> GameResult<Game> {
        if input.is_blank() {
            return Err(GameError::EmptyPayload);
        }

        let profile = input.into_profile(self.config.max_field_chars)?;
        let game = Game::new(profile);

        self.game_repo.create(&game).await?;

        tracing::info!(
            game_id = %game.game_id,
            title = %game.profile.title,
            "Game created"
        );

        Ok(game)
    }
}
