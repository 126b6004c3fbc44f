//! Favorite factory functions.
//!
//! Each function inserts a favorite row with exactly one target column populated,
//! which is the only shape the application writes.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

async fn insert_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: Option<i32>,
    character_id: Option<i32>,
    starship_id: Option<i32>,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
        character_id: ActiveValue::Set(character_id),
        starship_id: ActiveValue::Set(starship_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a favorite linking a user to a planet.
pub async fn create_planet_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    insert_favorite(db, user_id, Some(planet_id), None, None).await
}

/// Creates a favorite linking a user to a character.
pub async fn create_character_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    insert_favorite(db, user_id, None, Some(character_id), None).await
}

/// Creates a favorite linking a user to a starship.
pub async fn create_starship_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    starship_id: i32,
) -> Result<entity::favorite::Model, DbErr> {
    insert_favorite(db, user_id, None, None, Some(starship_id)).await
}
