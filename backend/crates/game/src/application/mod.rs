//! Application Layer - Use Cases
//!
//! One use case per HTTP operation, each generic over the repository.

pub mod config;
pub mod create_game;
pub mod delete_game;
pub mod get_game;
pub mod list_games;

pub use create_game::{CreateGameInput, CreateGameUseCase};
pub use delete_game::DeleteGameUseCase;
pub use get_game::GetGameUseCase;
pub use list_games::ListGamesUseCase;

use crate::domain::value_objects::GameId;
use crate::error::{GameError, GameResult};

/// Ids that do not parse can never match a stored game.
pub(crate) fn parse_game_id(raw: &str) -> GameResult<GameId> {
    GameId::parse_str(raw).ok_or(GameError::NotFound)
}
