use crate::server::{
    data::{
        character::CharacterRepository, planet::PlanetRepository, starship::StarshipRepository,
    },
    model::{
        character::CreateCharacterParam, planet::CreatePlanetParam,
        starship::CreateStarshipParam,
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
