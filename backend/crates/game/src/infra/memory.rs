//! In-memory Repository Implementation
//!
//! Process-local store used when no database is configured, and by tests.
//! Clones share the same underlying store.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Game;
use crate::domain::repository::GameRepository;
use crate::domain::value_objects::GameId;
use crate::error::GameResult;

#[derive(Clone, Default)]
pub struct InMemoryGameRepository {
    // Vec keeps insertion order for get_all
    games: Arc<RwLock<Vec<Game>>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every stored game
    #[cfg(test)]
    pub async fn reset(&self) {
        self.games.write().await.clear();
    }
}

impl GameRepository for InMemoryGameRepository {
    async fn create(&self, game: &Game) -> GameResult<()> {
        self.games.write().await.push(game.clone());
        Ok(())
    }

    async fn get_by_id(&self, game_id: &GameId) -> GameResult<Option<Game>> {
        let games = self.games.read().await;
        Ok(games.iter().find(|g| &g.game_id == game_id).cloned())
    }

    async fn get_all(&self) -> GameResult<Vec<Game>> {
        Ok(self.games.read().await.clone())
    }

    async fn delete_by_id(&self, game_id: &GameId) -> GameResult<bool> {
        let mut games = self.games.write().await;
        match games.iter().position(|g| &g.game_id == game_id) {
            Some(index) => {
                games.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::GameProfile;
    use crate::domain::value_objects::{GameText, GameTitle};

    fn game(title: &str) -> Game {
        Game::new(GameProfile {
            title: GameTitle::from_stored(title.to_string()),
            genre: GameText::default(),
            developer: GameText::default(),
            publisher: GameText::default(),
            platforms: GameText::default(),
            rating_esrb: GameText::default(),
            release_date: GameText::default(),
        })
    }

    #[tokio::test]
    async fn test_get_all_keeps_insertion_order() {
        let repo = InMemoryGameRepository::new();
        for title in ["Metroid Prime", "Pikmin", "F-Zero GX"] {
            repo.create(&game(title)).await.unwrap();
        }

        let titles: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.profile.title.into_inner())
            .collect();
        assert_eq!(titles, ["Metroid Prime", "Pikmin", "F-Zero GX"]);
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let repo = InMemoryGameRepository::new();
        let kept = game("Pikmin");
        let removed = game("Metroid Prime");
        repo.create(&kept).await.unwrap();
        repo.create(&removed).await.unwrap();

        assert!(repo.delete_by_id(&removed.game_id).await.unwrap());
        assert!(!repo.delete_by_id(&removed.game_id).await.unwrap());
        assert!(repo.get_by_id(&removed.game_id).await.unwrap().is_none());
        assert!(repo.get_by_id(&kept.game_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clones_share_store_and_reset_clears_it() {
        let repo = InMemoryGameRepository::new();
        let handle = repo.clone();
        handle.create(&game("Pikmin")).await.unwrap();
        assert_eq!(repo.get_all().await.unwrap().len(), 1);

        repo.reset().await;
        assert!(handle.get_all().await.unwrap().is_empty());
    }
}
