//! Argon2id password hashing for stored user credentials.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes a plain password into a PHC string (`$argon2id$v=19$...`).
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash including algorithm parameters and salt
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}
