//! Favorite data repository.
//!
//! Read access used by the favorite service and listing endpoints, plus the single
//! constrained insert and the delete. Uniqueness is never checked here
//! with a separate query; the unique indexes on the table reject duplicates.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::favorite::{Favorite, FavoriteKind, FavoriteParam, FavoriteTarget};

/// Maps a favorite kind to the column holding its target id.
fn target_column(kind: FavoriteKind) -> entity::favorite::Column {
    match kind {
        FavoriteKind::Planet => entity::favorite::Column::PlanetId,
        FavoriteKind::Character => entity::favorite::Column::CharacterId,
        FavoriteKind::Starship => entity::favorite::Column::StarshipId,
    }
}

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a favorite row with exactly one target column populated.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The created favorite
    /// - `Err(DbErr)` - Insert failed; `sql_err()` yields `UniqueConstraintViolation` when
    ///   the user already favorited the target and `ForeignKeyConstraintViolation` when
    ///   the user or target row does not exist
    pub async fn create(&self, param: FavoriteParam) -> Result<Favorite, DbErr> {
        let (planet_id, character_id, starship_id) = param.target.columns();

        let entity = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            planet_id: ActiveValue::Set(planet_id),
            character_id: ActiveValue::Set(character_id),
            starship_id: ActiveValue::Set(starship_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Favorite::from_entity(entity)
    }

    /// Finds a favorite by its natural key `(user_id, kind, target_id)`.
    pub async fn find(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, DbErr> {
        let entity = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(target_column(target.kind()).eq(target.id()))
            .one(self.db)
            .await?;

        entity.map(Favorite::from_entity).transpose()
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Favorite>, DbErr> {
        let entity = entity::prelude::Favorite::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(Favorite::from_entity).transpose()
    }

    /// Gets every favorite belonging to a user, oldest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Favorite::from_entity)
            .collect()
    }

    /// Deletes a favorite by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - The favorite was deleted
    /// - `Ok(false)` - No favorite with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether the entity a target points at exists.
    pub async fn target_exists(&self, target: FavoriteTarget) -> Result<bool, DbErr> {
        let count = match target {
            FavoriteTarget::Planet(id) => {
                entity::prelude::Planet::find_by_id(id).count(self.db).await?
            }
            FavoriteTarget::Character(id) => {
                entity::prelude::Character::find_by_id(id)
                    .count(self.db)
                    .await?
            }
            FavoriteTarget::Starship(id) => {
                entity::prelude::Starship::find_by_id(id)
                    .count(self.db)
                    .await?
            }
        };

        Ok(count > 0)
    }
}
