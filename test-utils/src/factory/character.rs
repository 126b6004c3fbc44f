//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters.
///
/// Only the name is customizable; the physical attributes default to `None`.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    gender: Option<String>,
}

impl<'a> CharacterFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Character {}", next_id()),
            gender: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            name: ActiveValue::Set(self.name),
            height: ActiveValue::Set(None),
            mass: ActiveValue::Set(None),
            hair_color: ActiveValue::Set(None),
            skin_color: ActiveValue::Set(None),
            eye_color: ActiveValue::Set(None),
            birth_year: ActiveValue::Set(None),
            gender: ActiveValue::Set(self.gender),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
