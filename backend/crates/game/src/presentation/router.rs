//! Game Router

use axum::{Router, routing::get};
use kernel::web::fallback_not_found;
use std::sync::Arc;

use crate::application::config::GameConfig;
use crate::domain::repository::GameRepository;
use crate::presentation::handlers::{self, GameAppState};

pub const GAMES_PATH: &str = "/api/games";
pub const GAME_PATH: &str = "/api/games/{game_id}";

/// Create the game router for any repository implementation
///
/// A method a known path does not serve answers 404, like an unknown path.
pub fn game_router<R>(repo: R, config: GameConfig) -> Router
where
    R: GameRepository + Clone + Send + Sync + 'static,
{
    let state = GameAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            GAMES_PATH,
            get(handlers::list_games::<R>).post(handlers::create_game::<R>),
        )
        .route(
            GAME_PATH,
            get(handlers::get_game::<R>).delete(handlers::delete_game::<R>),
        )
        .method_not_allowed_fallback(fallback_not_found)
        .with_state(state)
}
