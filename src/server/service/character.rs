use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository,
    error::AppError,
    model::character::{Character, CreateCharacterParam},
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        Ok(CharacterRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Character, AppError> {
        CharacterRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".to_string()))
    }

    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, AppError> {
        let character = CharacterRepository::new(self.db).create(param).await?;

        tracing::info!("Created character {} ({})", character.id, character.name);

        Ok(character)
    }
}
