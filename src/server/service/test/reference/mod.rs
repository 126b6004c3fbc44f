use crate::server::{
    error::AppError,
    service::{character::CharacterService, planet::PlanetService, starship::StarshipService},
};
use test_utils::{builder::TestBuilder, factory};
