use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        character::{CreateCharacterDto, CharacterDto},
    },
    server::{
        error::AppError, model::character::CreateCharacterParam, service::character::CharacterService,
        state::AppState,
    },
};

pub static CHARACTER_TAG: &str = "character";

#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters, possibly empty", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let characters = CharacterService::new(&state.db).get_all().await?;

    let characters_dto: Vec<_> = characters.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(characters_dto)))
}

#[utoipa::path(
    get,
    path = "/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = i32, Path, description = "Character ID")
    ),
    responses(
        (status = 200, description = "The character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(character_id) = path?;

    let character = CharacterService::new(&state.db).get_by_id(character_id).await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Create a character. Only `name` is required.
#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 201, description = "Character created", body = CharacterDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateCharacterParam::from_dto(payload)?;

    let character = CharacterService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(character.into_dto())))
}
