//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let planet = factory::create_planet(&db).await?;
//! let favorite = factory::create_planet_favorite(&db, user.id, planet.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .username("luke")
//!     .email("luke@tatooine.net")
//!     .build()
//!     .await?;
//! ```

pub mod character;
pub mod favorite;
pub mod helpers;
pub mod planet;
pub mod starship;
pub mod user;

pub use character::create_character;
pub use favorite::{create_character_favorite, create_planet_favorite, create_starship_favorite};
pub use planet::create_planet;
pub use starship::create_starship;
pub use user::create_user;
