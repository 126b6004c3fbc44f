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
        starship::{CreateStarshipDto, StarshipDto},
    },
    server::{
        error::AppError, model::starship::CreateStarshipParam, service::starship::StarshipService,
        state::AppState,
    },
};

pub static STARSHIP_TAG: &str = "starship";

#[utoipa::path(
    get,
    path = "/starships",
    tag = STARSHIP_TAG,
    responses(
        (status = 200, description = "All starships, possibly empty", body = Vec<StarshipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starships(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let starships = StarshipService::new(&state.db).get_all().await?;

    let starships_dto: Vec<_> = starships.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(starships_dto)))
}

#[utoipa::path(
    get,
    path = "/starships/{starship_id}",
    tag = STARSHIP_TAG,
    params(
        ("starship_id" = i32, Path, description = "Starship ID")
    ),
    responses(
        (status = 200, description = "The starship", body = StarshipDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starship(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(starship_id) = path?;

    let starship = StarshipService::new(&state.db).get_by_id(starship_id).await?;

    Ok((StatusCode::OK, Json(starship.into_dto())))
}

/// Create a starship. Only `name` is required.
#[utoipa::path(
    post,
    path = "/starships",
    tag = STARSHIP_TAG,
    request_body = CreateStarshipDto,
    responses(
        (status = 201, description = "Starship created", body = StarshipDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_starship(
    State(state): State<AppState>,
    payload: Result<Json<CreateStarshipDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateStarshipParam::from_dto(payload)?;

    let starship = StarshipService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(starship.into_dto())))
}
