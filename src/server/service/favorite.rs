//! Favorite service: the only place favorite rows are created or removed.
//!
//! Adding a favorite runs in one transaction: the user and target existence checks
//! and the insert see the same snapshot, and any early return drops the transaction,
//! rolling it back and returning its connection to the pool. Duplicate detection is
//! left to the unique indexes so two concurrent adds cannot both succeed.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::AppError,
    model::favorite::{Favorite, FavoriteParam},
};

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

fn favorite_not_found() -> AppError {
    AppError::NotFound("Favorite not found".to_string())
}

/// Translates a failed favorite insert into the domain error it represents.
///
/// A foreign key violation means the user or the target was deleted after the
/// existence checks; the user is looked up again on `db` to report which.
async fn map_insert_error<C: ConnectionTrait>(
    db: &C,
    err: DbErr,
    param: FavoriteParam,
) -> AppError {
    let kind = param.target.kind();

    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict(format!("{} already on favorites list", kind))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            match UserRepository::new(db).exists(param.user_id).await {
                Ok(false) => user_not_found(),
                Ok(true) => kind.not_found(),
                Err(e) => AppError::DbErr(e),
            }
        }
        _ => AppError::DbErr(err),
    }
}

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a target to a user's favorites.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - Newly created favorite
    /// - `Err(AppError::NotFound)` - User missing ("User not found") or target missing
    ///   ("<Kind> not found"); the user is checked first
    /// - `Err(AppError::Conflict)` - User already favorited this target
    /// - `Err(AppError::DbErr)` - Any other database failure
    pub async fn add(&self, param: FavoriteParam) -> Result<Favorite, AppError> {
        let kind = param.target.kind();
        let txn = self.db.begin().await?;

        if !UserRepository::new(&txn).exists(param.user_id).await? {
            return Err(user_not_found());
        }

        let favorite_repo = FavoriteRepository::new(&txn);

        if !favorite_repo.target_exists(param.target).await? {
            return Err(kind.not_found());
        }

        let favorite = match favorite_repo.create(param).await {
            Ok(favorite) => favorite,
            Err(e) => return Err(map_insert_error(&txn, e, param).await),
        };

        txn.commit().await?;

        tracing::info!(
            "User {} added {} {} to favorites",
            param.user_id,
            kind,
            param.target.id()
        );

        Ok(favorite)
    }

    /// Removes a target from a user's favorites.
    ///
    /// Not idempotent: a second call for the same key reports `NotFound`.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite deleted
    /// - `Err(AppError::NotFound)` - No favorite matches `(user_id, kind, target_id)`
    pub async fn remove(&self, param: FavoriteParam) -> Result<(), AppError> {
        let repo = FavoriteRepository::new(self.db);

        let favorite = repo
            .find(param.user_id, param.target)
            .await?
            .ok_or_else(favorite_not_found)?;

        // Lost a race with another remove of the same favorite
        if !repo.delete(favorite.id).await? {
            return Err(favorite_not_found());
        }

        tracing::info!(
            "User {} removed {} {} from favorites",
            param.user_id,
            param.target.kind(),
            param.target.id()
        );

        Ok(())
    }

    /// Lists every favorite of a user. An empty list is a valid result.
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - Favorites ordered by creation
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, AppError> {
        if !UserRepository::new(self.db).exists(user_id).await? {
            return Err(user_not_found());
        }

        let favorites = FavoriteRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        tracing::debug!("User {} has {} favorites", user_id, favorites.len());

        Ok(favorites)
    }

    /// Looks up a favorite by its own id.
    pub async fn get_by_id(&self, id: i32) -> Result<Favorite, AppError> {
        FavoriteRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(favorite_not_found)
    }
}
