//! Business logic layer.
//!
//! Services sit between controllers and repositories. They own every invariant that
//! spans more than one query (existence checks, uniqueness translation, password
//! hashing) and return domain models, never DTOs or entities.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;
