use crate::{
    model::starship::{CreateStarshipDto, StarshipDto},
    server::{error::AppError, util::validate::required},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Starship {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub starship_class: Option<String>,
}

impl Starship {
    pub fn into_dto(self) -> StarshipDto {
        StarshipDto {
            id: self.id,
            name: self.name,
            model: self.model,
            manufacturer: self.manufacturer,
            starship_class: self.starship_class,
        }
    }

    pub fn from_entity(entity: entity::starship::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            model: entity.model,
            manufacturer: entity.manufacturer,
            starship_class: entity.starship_class,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStarshipParam {
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub starship_class: Option<String>,
}

impl CreateStarshipParam {
    pub fn from_dto(dto: CreateStarshipDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required("name", dto.name)?,
            model: dto.model,
            manufacturer: dto.manufacturer,
            starship_class: dto.starship_class,
        })
    }
}
