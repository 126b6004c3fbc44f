//! Route table and OpenAPI document.
//!
//! Handlers are registered through `OpenApiRouter` so the documented paths and the
//! served paths come from the same `#[utoipa::path]` annotations. The root route
//! returns those paths as a sitemap.

use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{character, favorite, planet, starship, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Holonet API",
        description = "Users, planets, characters, starships and user favorites"
    ),
    tags(
        (name = "user", description = "User accounts"),
        (name = "favorite", description = "User favorites"),
        (name = "planet", description = "Planet reference data"),
        (name = "character", description = "Character reference data"),
        (name = "starship", description = "Starship reference data")
    )
)]
pub struct ApiDoc;

/// Builds the documented API routes and the OpenAPI document describing them.
pub fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(
            user::get_user,
            user::update_user,
            user::delete_user
        ))
        .routes(routes!(favorite::get_user_favorites))
        .routes(routes!(
            favorite::add_user_favorite,
            favorite::remove_user_favorite
        ))
        .routes(routes!(favorite::get_favorite))
        .routes(routes!(planet::get_planets, planet::create_planet))
        .routes(routes!(planet::get_planet))
        .routes(routes!(character::get_characters, character::create_character))
        .routes(routes!(character::get_character))
        .routes(routes!(starship::get_starships, starship::create_starship))
        .routes(routes!(starship::get_starship))
}

/// Assembles the full application: API routes, sitemap, Swagger UI and middleware.
pub fn app(state: AppState) -> Router {
    let (router, api) = api_router().split_for_parts();

    let sitemap: Vec<String> = api.paths.paths.keys().cloned().collect();

    router
        .route("/", get(move || async move { Json(sitemap) }))
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
