//! Centralized error handling.
//!
//! Provides a unified error type for the whole crate. The core defines a
//! single domain error (`DuplicateEmail`) plus a validation kind for
//! boundary DTO checks.

use thiserror::Error;

/// Application error types
/// SOLID - Open/Closed: Extend via new variants without modifying behavior
#[derive(Error, Debug)]
pub enum AppError {
    /// The requested email is already registered.
    #[error("email already in use")]
    DuplicateEmail,

    /// A request DTO failed its declarative validation.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DuplicateEmail => "DUPLICATE_EMAIL",
            AppError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(format_validation_errors(&errors))
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_email_message_is_fixed() {
        assert_eq!(AppError::DuplicateEmail.to_string(), "email already in use");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::DuplicateEmail.code(), "DUPLICATE_EMAIL");
        assert_eq!(AppError::validation("bad").code(), "VALIDATION_ERROR");
    }
}
