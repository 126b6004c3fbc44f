//! Starship factory for creating test starship entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test starships.
pub struct StarshipFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    model: Option<String>,
    manufacturer: Option<String>,
}

impl<'a> StarshipFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Starship {}", next_id()),
            model: None,
            manufacturer: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub async fn build(self) -> Result<entity::starship::Model, DbErr> {
        entity::starship::ActiveModel {
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set(self.model),
            manufacturer: ActiveValue::Set(self.manufacturer),
            starship_class: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a starship with default values.
pub async fn create_starship(db: &DatabaseConnection) -> Result<entity::starship::Model, DbErr> {
    StarshipFactory::new(db).build().await
}
