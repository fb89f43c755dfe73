//! Delete Game Use Case

use std::sync::Arc;

use crate::application::parse_game_id;
use crate::domain::repository::GameRepository;
use crate::error::{GameError, GameResult};

pub struct DeleteGameUseCase<R>
where
    R: GameRepository,
{
    game_repo: Arc<R>,
}

impl<R> DeleteGameUseCase<R>
where
    R: GameRepository,
{
    pub fn new(game_repo: Arc<R>) -> Self {
        Self { game_repo }
    }

    pub async fn execute(&self, raw_game_id: &str) -> GameResult<()> {
        let game_id = parse_game_id(raw_game_id)?;

        if !self.game_repo.delete_by_id(&game_id).await? {
            return Err(GameError::NotFound);
        }

        tracing::info!(game_id = %game_id, "Game deleted");
        Ok(())
    }
}
