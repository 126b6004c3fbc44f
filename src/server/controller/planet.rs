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
        planet::{CreatePlanetDto, PlanetDto},
    },
    server::{
        error::AppError, model::planet::CreatePlanetParam, service::planet::PlanetService,
        state::AppState,
    },
};

pub static PLANET_TAG: &str = "planet";

#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets, possibly empty", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    let planets_dto: Vec<_> = planets.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(planets_dto)))
}

#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "The planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(planet_id) = path?;

    let planet = PlanetService::new(&state.db).get_by_id(planet_id).await?;

    Ok((StatusCode::OK, Json(planet.into_dto())))
}

/// Create a planet. Only `name` is required.
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 201, description = "Planet created", body = PlanetDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreatePlanetParam::from_dto(payload)?;

    let planet = PlanetService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(planet.into_dto())))
}
