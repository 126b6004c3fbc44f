use crate::{
    model::planet::{CreatePlanetDto, PlanetDto},
    server::{error::AppError, util::validate::required},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
}

impl Planet {
    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            climate: self.climate,
            terrain: self.terrain,
            population: self.population,
        }
    }

    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            climate: entity.climate,
            terrain: entity.terrain,
            population: entity.population,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlanetParam {
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
}

impl CreatePlanetParam {
    pub fn from_dto(dto: CreatePlanetDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required("name", dto.name)?,
            climate: dto.climate,
            terrain: dto.terrain,
            population: dto.population,
        })
    }
}
