mod favorite;
mod reference;
mod user;
