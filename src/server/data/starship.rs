use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::starship::{CreateStarshipParam, Starship};

pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateStarshipParam) -> Result<Starship, DbErr> {
        let entity = entity::starship::ActiveModel {
            name: ActiveValue::Set(param.name),
            model: ActiveValue::Set(param.model),
            manufacturer: ActiveValue::Set(param.manufacturer),
            starship_class: ActiveValue::Set(param.starship_class),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Starship::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Starship>, DbErr> {
        let entity = entity::prelude::Starship::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Starship::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Starship>, DbErr> {
        let entities = entity::prelude::Starship::find()
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Starship::from_entity).collect())
    }
}
