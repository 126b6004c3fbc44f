use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteCreatedDto, FavoriteDto},
        planet::PlanetDto,
        user::UserDto,
    },
    server::{router, state::AppState},
};


/// Serves the full application against the test database.
fn test_server(db: &DatabaseConnection) -> TestServer {
    TestServer::new(router::app(AppState::new(db.clone()))).unwrap()
}
