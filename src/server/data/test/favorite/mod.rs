use crate::server::{
    data::favorite::FavoriteRepository,
    model::favorite::{FavoriteParam, FavoriteTarget},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_id;
mod get_by_user;
