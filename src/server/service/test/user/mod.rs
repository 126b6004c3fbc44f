use crate::{
    model::user::CreateUserDto,
    server::{
        error::AppError,
        model::user::{CreateUserParam, UpdateUserParam},
        service::user::UserService,
    },
};
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn create_param(username: &str, email: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        email: email.to_string(),
        password: "usetheforce".to_string(),
        name: Some("Obi-Wan Kenobi".to_string()),
    }
}

async fn stored_password(db: &sea_orm::DatabaseConnection, id: i32) -> String {
    entity::prelude::User::find_by_id(id)
        .one(db)
        .await
        .unwrap()
        .unwrap()
        .password
}
