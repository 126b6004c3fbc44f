//! HTTP request handlers.
//!
//! Controllers extract path and body data, convert DTOs into validated parameter
//! models, call a service, and convert the returned domain model back into a DTO.
//! Extraction failures are taken as `Result` so they are reported through the same
//! error envelope as every other failure.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;

#[cfg(test)]
mod test;
