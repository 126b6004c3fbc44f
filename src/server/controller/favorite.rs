use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteCreatedDto, FavoriteDto},
    },
    server::{
        error::AppError, model::favorite::FavoriteParam, service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Tag for grouping favorite endpoints in OpenAPI documentation
pub static FAVORITE_TAG: &str = "favorite";

/// List a user's favorites.
///
/// # Returns
/// - `200 OK` - Array of favorites, possibly empty
/// - `404 Not Found` - User does not exist
#[utoipa::path(
    get,
    path = "/user/{user_id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorites of the user", body = Vec<FavoriteDto>),
        (status = 400, description = "Malformed user ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(user_id) = path?;

    let favorites = FavoriteService::new(&state.db).get_by_user(user_id).await?;

    let favorites_dto: Vec<_> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(favorites_dto)))
}

/// Add a planet, character or starship to a user's favorites.
///
/// `kind` accepts `planet`, `character` or `starship`, singular or plural.
///
/// # Returns
/// - `200 OK` - Confirmation message and the created favorite
/// - `400 Bad Request` - Unknown kind, malformed ID, or target already favorited
/// - `404 Not Found` - User or target does not exist
#[utoipa::path(
    post,
    path = "/user/{user_id}/favorites/{kind}/{target_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("kind" = String, Path, description = "planet, character or starship"),
        ("target_id" = i32, Path, description = "ID of the planet, character or starship")
    ),
    responses(
        (status = 200, description = "Favorite added", body = FavoriteCreatedDto),
        (status = 400, description = "Invalid kind or already on favorites list", body = ErrorDto),
        (status = 404, description = "User or target not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user_favorite(
    State(state): State<AppState>,
    path: Result<Path<(i32, String, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((user_id, kind, target_id)) = path?;
    let param = FavoriteParam::from_path(user_id, &kind, target_id)?;

    let favorite = FavoriteService::new(&state.db).add(param).await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteCreatedDto {
            message: format!(
                "{} added to favorites successfully",
                param.target.kind().label()
            ),
            favorite: favorite.into_dto(),
        }),
    ))
}

/// Remove a planet, character or starship from a user's favorites.
///
/// # Returns
/// - `200 OK` - Favorite deleted
/// - `400 Bad Request` - Unknown kind or malformed ID
/// - `404 Not Found` - No such favorite
#[utoipa::path(
    delete,
    path = "/user/{user_id}/favorites/{kind}/{target_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("kind" = String, Path, description = "planet, character or starship"),
        ("target_id" = i32, Path, description = "ID of the planet, character or starship")
    ),
    responses(
        (status = 200, description = "Favorite deleted", body = MessageDto),
        (status = 400, description = "Invalid kind", body = ErrorDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_user_favorite(
    State(state): State<AppState>,
    path: Result<Path<(i32, String, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((user_id, kind, target_id)) = path?;
    let param = FavoriteParam::from_path(user_id, &kind, target_id)?;

    FavoriteService::new(&state.db).remove(param).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Favorite successfully deleted")),
    ))
}

/// Get a single favorite by its ID.
#[utoipa::path(
    get,
    path = "/favorites/{favorite_id}",
    tag = FAVORITE_TAG,
    params(
        ("favorite_id" = i32, Path, description = "Favorite ID")
    ),
    responses(
        (status = 200, description = "The favorite", body = FavoriteDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorite(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(favorite_id) = path?;

    let favorite = FavoriteService::new(&state.db).get_by_id(favorite_id).await?;

    Ok((StatusCode::OK, Json(favorite.into_dto())))
}
