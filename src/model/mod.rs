//! Wire representations shared by every endpoint.
//!
//! DTOs here are what clients send and receive. Server-side domain models convert into
//! these at the controller boundary via `into_dto`.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;
