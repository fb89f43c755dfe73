//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

use crate::application::config::GameConfig;
use crate::application::{
    CreateGameUseCase, DeleteGameUseCase, GetGameUseCase, ListGamesUseCase,
};
use crate::domain::repository::GameRepository;
use crate::error::{GameError, GameResult};
use crate::presentation::dto::{CreateGameRequest, GameResponse};

/// Shared state for game handlers
#[derive(Clone)]
pub struct GameAppState<R>
where
    R: GameRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<GameConfig>,
}

/// POST /api/games
///
/// Any body that does not extract as a JSON object is a client error, so
/// the rejection is taken by value and mapped to 400 instead of axum's default.
pub async fn create_game<R>(
    State(state): State<GameAppState<R>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> GameResult<Json<GameResponse>>
where
    R: GameRepository + Clone + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let req = CreateGameRequest::try_from(body)?;

    let use_case = CreateGameUseCase::new(state.repo.clone(), state.config.clone());
    let game = use_case.execute(req.into()).await?;

    Ok(Json(game.into()))
}

/// GET /api/games
pub async fn list_games<R>(
    State(state): State<GameAppState<R>>,
) -> GameResult<Json<Vec<GameResponse>>>
where
    R: GameRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListGamesUseCase::new(state.repo.clone());
    let games = use_case.execute().await?;

    Ok(Json(games.into_iter().map(GameResponse::from).collect()))
}

/// Ids that cannot even be decoded (e.g. `%FF`) are unknown ids, not bad requests.
fn game_id_param(path: Result<Path<String>, PathRejection>) -> GameResult<String> {
    path.map(|Path(game_id)| game_id).map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Undecodable game id");
        GameError::NotFound
    })
}

/// GET /api/games/{game_id}
pub async fn get_game<R>(
    State(state): State<GameAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> GameResult<Json<GameResponse>>
where
    R: GameRepository + Clone + Send + Sync + 'static,
{
    let game_id = game_id_param(path)?;
    let use_case = GetGameUseCase::new(state.repo.clone());
    let game = use_case.execute(&game_id).await?;

    Ok(Json(game.into()))
}

/// DELETE /api/games/{game_id}
pub async fn delete_game<R>(
    State(state): State<GameAppState<R>>,
    path: Result<Path<String>, PathRejection>,
) -> GameResult<StatusCode>
where
    R: GameRepository + Clone + Send + Sync + 'static,
{
    let game_id = game_id_param(path)?;
    let use_case = DeleteGameUseCase::new(state.repo.clone());
    use_case.execute(&game_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
