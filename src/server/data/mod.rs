//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the entity crate out of business logic. Every repository is
//! generic over `ConnectionTrait` so the same code runs against the pool or inside a
//! transaction.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;

#[cfg(test)]
mod test;
