//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Game, GameProfile)
//! - Domain value objects (GameTitle, GameText)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
