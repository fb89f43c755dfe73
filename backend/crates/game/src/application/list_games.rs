//! List Games Use Case

use std::sync::Arc;

use crate::domain::entities::Game;
use crate::domain::repository::GameRepository;
use crate::error::GameResult;

pub struct ListGamesUseCase<R>
where
    R: GameRepository,
{
    game_repo: Arc<R>,
}

impl<R> ListGamesUseCase<R>
where
    R: GameRepository,
{
    pub fn new(game_repo: Arc<R>) -> Self {
        Self { game_repo }
    }

    pub async fn execute(&self) -> GameResult<Vec<Game>> {
        let games = self.game_repo.get_all().await?;
        tracing::debug!(count = games.len(), "Listed games");
        Ok(games)
    }
}
