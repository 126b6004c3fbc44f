use sea_orm::DatabaseConnection;

use crate::server::{
    data::planet::PlanetRepository,
    error::AppError,
    model::planet::{CreatePlanetParam, Planet},
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        Ok(PlanetRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        PlanetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet not found".to_string()))
    }

    pub async fn create(&self, param: CreatePlanetParam) -> Result<Planet, AppError> {
        let planet = PlanetRepository::new(self.db).create(param).await?;

        tracing::info!("Created planet {} ({})", planet.id, planet.name);

        Ok(planet)
    }
}
