//! Game Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Game entity, value objects, repository trait
//! - `application/` - Use cases (create, get, list, delete)
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## HTTP contract
//! - `POST /api/games` - 200 with the stored game, 400 on an empty or invalid body
//! - `GET /api/games` - 200 with every game in insertion order
//! - `GET /api/games/{id}` - 200, or 404 for unknown and malformed ids
//! - `DELETE /api/games/{id}` - 204, or 404 for unknown and malformed ids

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GameConfig;
pub use error::{GameError, GameResult};
pub use infra::memory::InMemoryGameRepository;
pub use infra::postgres::PgGameRepository;
pub use presentation::router::game_router;
