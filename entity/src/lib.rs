pub mod prelude;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;
