//! Get Game Use Case

use std::sync::Arc;

use crate::application::parse_game_id;
use crate::domain::entities::Game;
use crate::domain::repository::GameRepository;
use crate::error::{GameError, GameResult};

pub struct GetGameUseCase<R>
where
    R: GameRepository,
{
    game_repo: Arc<R>,
}

impl<R> GetGameUseCase<R>
where
    R: GameRepository,
{
    pub fn new(game_repo: Arc<R>) -> Self {
        Self { game_repo }
    }

    /// Look up a game by its raw path id
    pub async fn execute(&self, raw_game_id: &str) -> GameResult<Game> {
        let game_id = parse_game_id(raw_game_id)?;

        self.game_repo
            .get_by_id(&game_id)
            .await?
            .ok_or(GameError::NotFound)
    }
}
