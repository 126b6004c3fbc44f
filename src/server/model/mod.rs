//! Domain models and operation-specific parameter types.
//!
//! Entities from the `entity` crate are converted into these models at the repository
//! boundary (`from_entity`), and these models are converted into wire DTOs at the
//! controller boundary (`into_dto`). Parameter types carry validated request data
//! into services and repositories.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;
