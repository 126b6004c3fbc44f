use sea_orm::DatabaseConnection;

use crate::server::{
    data::starship::StarshipRepository,
    error::AppError,
    model::starship::{CreateStarshipParam, Starship},
};

pub struct StarshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Starship>, AppError> {
        Ok(StarshipRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Starship, AppError> {
        StarshipRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Starship not found".to_string()))
    }

    pub async fn create(&self, param: CreateStarshipParam) -> Result<Starship, AppError> {
        let starship = StarshipRepository::new(self.db).create(param).await?;

        tracing::info!("Created starship {} ({})", starship.id, starship.name);

        Ok(starship)
    }
}
