//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entities::Game;
use crate::domain::value_objects::GameId;
use crate::error::GameResult;

/// Game repository trait
#[trait_variant::make(GameRepository: Send)]
pub trait LocalGameRepository {
    /// Store a new game
    async fn create(&self, game: &Game) -> GameResult<()>;

    /// Find a game by ID
    async fn get_by_id(&self, game_id: &GameId) -> GameResult<Option<Game>>;

    /// All games, oldest first
    async fn get_all(&self) -> GameResult<Vec<Game>>;

    /// Delete a game. Returns false if no game had this ID.
    async fn delete_by_id(&self, game_id: &GameId) -> GameResult<bool>;
}
