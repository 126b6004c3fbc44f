use crate::{
    model::character::{CharacterDto, CreateCharacterDto},
    server::{error::AppError, util::validate::required},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

impl Character {
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            height: self.height,
            mass: self.mass,
            hair_color: self.hair_color,
            skin_color: self.skin_color,
            eye_color: self.eye_color,
            birth_year: self.birth_year,
            gender: self.gender,
        }
    }

    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            height: entity.height,
            mass: entity.mass,
            hair_color: entity.hair_color,
            skin_color: entity.skin_color,
            eye_color: entity.eye_color,
            birth_year: entity.birth_year,
            gender: entity.gender,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCharacterParam {
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

impl CreateCharacterParam {
    pub fn from_dto(dto: CreateCharacterDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required("name", dto.name)?,
            height: dto.height,
            mass: dto.mass,
            hair_color: dto.hair_color,
            skin_color: dto.skin_color,
            eye_color: dto.eye_color,
            birth_year: dto.birth_year,
            gender: dto.gender,
        })
    }
}
