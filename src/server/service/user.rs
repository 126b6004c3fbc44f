//! User service for business logic.
//!
//! Hashes passwords before they reach the repository and translates unique
//! constraint violations on username or email into conflicts.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User},
    util::password::hash_password,
};

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

fn map_write_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("Username or email already in use".to_string())
        }
        _ => AppError::DbErr(err),
    }
}

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Creates a user, storing an Argon2id hash of the password.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::Conflict)` - Username or email already taken
    pub async fn create(&self, mut param: CreateUserParam) -> Result<User, AppError> {
        param.password = hash_password(&param.password)?;

        let user = UserRepository::new(self.db)
            .create(param)
            .await
            .map_err(map_write_error)?;

        tracing::info!("Created user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Applies a partial update to a user.
    ///
    /// An update with no fields returns the user unchanged.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::Conflict)` - New username or email already taken
    pub async fn update(&self, id: i32, mut param: UpdateUserParam) -> Result<User, AppError> {
        if param.is_empty() {
            return self.get_by_id(id).await;
        }

        if let Some(password) = param.password.take() {
            param.password = Some(hash_password(&password)?);
        }

        let user = UserRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(map_write_error)?
            .ok_or_else(user_not_found)?;

        tracing::info!("Updated user {}", user.id);

        Ok(user)
    }

    /// Deletes a user along with all of their favorites.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(user_not_found());
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
