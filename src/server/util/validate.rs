//! Field checks applied when converting request DTOs into parameter models.

use crate::server::error::AppError;

/// Returns the trimmed value of a required field.
///
/// # Returns
/// - `Ok(String)` - Field present and non-blank
/// - `Err(AppError::Validation)` - Field absent or blank
pub fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!(
            "Missing required field: {}",
            field
        ))),
    }
}

/// Validates a field that may be omitted but must not be blank when given.
///
/// # Returns
/// - `Ok(None)` - Field omitted
/// - `Ok(Some(String))` - Trimmed, non-blank value
/// - `Err(AppError::Validation)` - Field present but blank
pub fn non_blank(field: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    match value {
        None => Ok(None),
        Some(v) => {
            let v = v.trim().to_string();
            if v.is_empty() {
                Err(AppError::Validation(format!(
                    "Field must not be blank: {}",
                    field
                )))
            } else {
                Ok(Some(v))
            }
        }
    }
}

/// Like `required`, but returns the value exactly as given.
///
/// Used for passwords, where surrounding whitespace is part of the secret.
pub fn required_untrimmed(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!(
            "Missing required field: {}",
            field
        ))),
    }
}

/// Like `non_blank`, but returns the value exactly as given.
pub fn non_blank_untrimmed(
    field: &str,
    value: Option<String>,
) -> Result<Option<String>, AppError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(AppError::Validation(format!(
            "Field must not be blank: {}",
            field
        ))),
        other => Ok(other),
    }
}
