//! Favorite domain models and parameters.
//!
//! A favorite links one user to exactly one target of one kind. The database row has
//! three nullable target columns; in the domain model that invariant is carried by
//! `FavoriteTarget`, so code past the repository boundary never sees an ambiguous row.

use std::{fmt, str::FromStr};

use sea_orm::DbErr;

use crate::{model::favorite::FavoriteDto, server::error::AppError};

/// Which reference entity a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Planet,
    Character,
    Starship,
}

impl FavoriteKind {
    /// Lowercase name used in routes and conflict messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planet => "planet",
            Self::Character => "character",
            Self::Starship => "starship",
        }
    }

    /// Capitalized name used in not-found and confirmation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planet => "Planet",
            Self::Character => "Character",
            Self::Starship => "Starship",
        }
    }

    pub fn not_found(&self) -> AppError {
        AppError::NotFound(format!("{} not found", self.label()))
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a route segment into a kind.
///
/// Accepts singular and plural forms in any case (`planet`, `Planets`, ...).
impl FromStr for FavoriteKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "planet" | "planets" => Ok(Self::Planet),
            "character" | "characters" => Ok(Self::Character),
            "starship" | "starships" => Ok(Self::Starship),
            _ => Err(AppError::Validation(format!(
                "Invalid favorite kind '{}'",
                s
            ))),
        }
    }
}

/// The single entity a favorite points at, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Planet(i32),
    Character(i32),
    Starship(i32),
}

impl FavoriteTarget {
    pub fn new(kind: FavoriteKind, id: i32) -> Self {
        match kind {
            FavoriteKind::Planet => Self::Planet(id),
            FavoriteKind::Character => Self::Character(id),
            FavoriteKind::Starship => Self::Starship(id),
        }
    }

    pub fn kind(&self) -> FavoriteKind {
        match self {
            Self::Planet(_) => FavoriteKind::Planet,
            Self::Character(_) => FavoriteKind::Character,
            Self::Starship(_) => FavoriteKind::Starship,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Self::Planet(id) | Self::Character(id) | Self::Starship(id) => *id,
        }
    }

    /// Splits the target into the `(planet_id, character_id, starship_id)` column triple.
    pub fn columns(&self) -> (Option<i32>, Option<i32>, Option<i32>) {
        match *self {
            Self::Planet(id) => (Some(id), None, None),
            Self::Character(id) => (None, Some(id), None),
            Self::Starship(id) => (None, None, Some(id)),
        }
    }
}

/// A persisted favorite.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

impl Favorite {
    /// Converts an entity model to a favorite domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - Row has exactly one target column set
    /// - `Err(DbErr::Custom)` - Row has no target or more than one target set
    pub fn from_entity(entity: entity::favorite::Model) -> Result<Self, DbErr> {
        let target = match (entity.planet_id, entity.character_id, entity.starship_id) {
            (Some(id), None, None) => FavoriteTarget::Planet(id),
            (None, Some(id), None) => FavoriteTarget::Character(id),
            (None, None, Some(id)) => FavoriteTarget::Starship(id),
            _ => {
                return Err(DbErr::Custom(format!(
                    "Favorite {} must reference exactly one target",
                    entity.id
                )))
            }
        };

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            target,
        })
    }

    /// Converts the favorite domain model to its wire representation.
    pub fn into_dto(self) -> FavoriteDto {
        let (planet_id, character_id, starship_id) = self.target.columns();

        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            planet_id,
            character_id,
            starship_id,
        }
    }
}

/// Identifies a favorite by its natural key for add and remove operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteParam {
    pub user_id: i32,
    pub target: FavoriteTarget,
}

impl FavoriteParam {
    /// Builds the parameter from raw path segments.
    ///
    /// # Returns
    /// - `Ok(FavoriteParam)` - Kind segment recognised
    /// - `Err(AppError::Validation)` - Unknown kind segment
    pub fn from_path(user_id: i32, kind: &str, target_id: i32) -> Result<Self, AppError> {
        let kind = kind.parse::<FavoriteKind>()?;

        Ok(Self {
            user_id,
            target: FavoriteTarget::new(kind, target_id),
        })
    }
}
