//! User domain models and parameters.

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        error::AppError,
        util::validate::{non_blank, non_blank_untrimmed, required, required_untrimmed},
    },
};

/// Application user. The stored password hash never leaves the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub name: Option<String>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            name: entity.name,
        }
    }
}

/// Validated parameters for creating a user.
///
/// `password` is the plain value from the request, untrimmed; the service hashes it
/// before it reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl CreateUserParam {
    /// Validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateUserParam)` - username, email and password all present and non-blank
    /// - `Err(AppError::Validation)` - A required field is missing or a field is blank
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            username: required("username", dto.username)?,
            email: required("email", dto.email)?,
            password: required_untrimmed("password", dto.password)?,
            name: non_blank("name", dto.name)?,
        })
    }
}

/// Validated parameters for a partial user update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            username: non_blank("username", dto.username)?,
            email: non_blank("email", dto.email)?,
            password: non_blank_untrimmed("password", dto.password)?,
            name: non_blank("name", dto.name)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.name.is_none()
    }
}
