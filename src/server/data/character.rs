use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::character::{Character, CreateCharacterParam};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, DbErr> {
        let entity = entity::character::ActiveModel {
            name: ActiveValue::Set(param.name),
            height: ActiveValue::Set(param.height),
            mass: ActiveValue::Set(param.mass),
            hair_color: ActiveValue::Set(param.hair_color),
            skin_color: ActiveValue::Set(param.skin_color),
            eye_color: ActiveValue::Set(param.eye_color),
            birth_year: ActiveValue::Set(param.birth_year),
            gender: ActiveValue::Set(param.gender),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Character::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Character>, DbErr> {
        let entity = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Character::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }
}
