//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Game, GameProfile};
use crate::domain::repository::GameRepository;
use crate::domain::value_objects::{GameId, GameText, GameTitle};
use crate::error::GameResult;

/// PostgreSQL-backed game repository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl GameRepository for PgGameRepository {
    async fn create(&self, game: &Game) -> GameResult<()> {
        let profile = &game.profile;

        sqlx::query(
            r#"
            INSERT INTO games (
                game_id,
                title,
                genre,
                developer,
                publisher,
                platforms,
                rating_esrb,
                release_date,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(game.game_id.as_uuid())
        .bind(profile.title.as_str())
        .bind(profile.genre.as_str())
        .bind(profile.developer.as_str())
        .bind(profile.publisher.as_str())
        .bind(profile.platforms.as_str())
        .bind(profile.rating_esrb.as_str())
        .bind(profile.release_date.as_str())
        .bind(game.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, game_id: &GameId) -> GameResult<Option<Game>> {
        let row = sqlx::query_as::<_, GameRow>(
            r#"
            SELECT
                game_id,
                title,
                genre,
                developer,
                publisher,
                platforms,
                rating_esrb,
                release_date,
                created_at
            FROM games
            WHERE game_id = $1
            "#,
        )
        .bind(game_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(GameRow::into_game))
    }

    async fn get_all(&self) -> GameResult<Vec<Game>> {
        let rows = sqlx::query_as::<_, GameRow>(
            r#"
            SELECT
                game_id,
                title,
                genre,
                developer,
                publisher,
                platforms,
                rating_esrb,
                release_date,
                created_at
            FROM games
            ORDER BY game_seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(GameRow::into_game).collect())
    }

    async fn delete_by_id(&self, game_id: &GameId) -> GameResult<bool> {
        let deleted = sqlx::query("DELETE FROM games WHERE game_id = $1")
            .bind(game_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct GameRow {
    game_id: Uuid,
    title: String,
    genre: String,
    developer: String,
    publisher: String,
    platforms: String,
    rating_esrb: String,
    release_date: String,
    created_at: DateTime<Utc>,
}

impl GameRow {
    fn into_game(self) -> Game {
        Game {
            game_id: GameId::from_uuid(self.game_id),
            profile: GameProfile {
                title: GameTitle::from_stored(self.title),
                genre: GameText::from_stored(self.genre),
                developer: GameText::from_stored(self.developer),
                publisher: GameText::from_stored(self.publisher),
                platforms: GameText::from_stored(self.platforms),
                rating_esrb: GameText::from_stored(self.rating_esrb),
                release_date: GameText::from_stored(self.release_date),
            },
            created_at: self.created_at,
        }
    }
}
