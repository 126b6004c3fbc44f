use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user's favorite pointing at exactly one planet, character or starship.
///
/// Only the populated target id is serialized; the other two are omitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starship_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct FavoriteCreatedDto {
    pub message: String,
    pub favorite: FavoriteDto,
}
