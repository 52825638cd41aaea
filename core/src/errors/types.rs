//! Domain-specific error types for authentication and related operations
//!
//! This module provides error type definitions for authentication, token
//! management and input validation. The HTTP status of every variant is
//! decided once, through [`ErrorKind`](super::ErrorKind).

use thiserror::Error;

use crate::domain::entities::Role;

/// Authentication and authorization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Not authenticated")]
    MissingToken,

    #[error("Access denied: {required} role required")]
    InsufficientRole { required: Role },

    #[error("Email already registered")]
    EmailAlreadyRegistered,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
///
/// Each variant names the field it concerns so clients can highlight it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Password must be at most {max} bytes long")]
    PasswordTooLong { max: usize },

    #[error(
        "Password must contain at least one lowercase letter, one uppercase letter, \
         one digit and one special character (@$!%*?&)"
    )]
    PasswordPattern,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("At least one {field} is required")]
    EmptyList { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },
}

impl ValidationError {
    /// Name of the offending input field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::EmptyList { field }
            | ValidationError::InvalidFormat { field } => field,
            ValidationError::InvalidEmail => "email",
            ValidationError::PasswordTooShort { .. }
            | ValidationError::PasswordTooLong { .. }
            | ValidationError::PasswordPattern => "password",
            ValidationError::PasswordMismatch => "password_2",
        }
    }
}

impl From<recipe_shared::validation::PasswordViolation> for ValidationError {
    fn from(violation: recipe_shared::validation::PasswordViolation) -> Self {
        use recipe_shared::validation::{
            PasswordViolation, PASSWORD_MAX_BYTES, PASSWORD_MIN_LENGTH,
        };

        match violation {
            PasswordViolation::TooShort => ValidationError::PasswordTooShort {
                min: PASSWORD_MIN_LENGTH,
            },
            PasswordViolation::TooLong => ValidationError::PasswordTooLong {
                max: PASSWORD_MAX_BYTES,
            },
            PasswordViolation::Pattern => ValidationError::PasswordPattern,
        }
    }
}
