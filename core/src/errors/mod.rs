//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("External service error: {message}")]
    ExternalService { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure categories the outer layers translate into responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Unauthorized,
    Forbidden,
    BadRequest,
    Conflict,
    Internal,
    ExternalService,
}

impl DomainError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::ValidationErr(_) => ErrorKind::BadRequest,
            DomainError::Token(_) => ErrorKind::Unauthorized,
            DomainError::Internal { .. } | DomainError::Database(_) => ErrorKind::Internal,
            DomainError::ExternalService { .. } => ErrorKind::ExternalService,
            DomainError::Auth(auth) => match auth {
                AuthError::InvalidCredentials | AuthError::MissingToken => ErrorKind::Unauthorized,
                AuthError::InsufficientRole { .. } => ErrorKind::Forbidden,
                AuthError::EmailAlreadyRegistered => ErrorKind::Conflict,
            },
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;

    #[test]
    fn test_auth_error_kinds() {
        assert_eq!(
            DomainError::from(AuthError::InvalidCredentials).kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(DomainError::from(AuthError::MissingToken).kind(), ErrorKind::Unauthorized);
        assert_eq!(
            DomainError::from(AuthError::InsufficientRole { required: Role::Admin }).kind(),
            ErrorKind::Forbidden
        );
        assert_eq!(
            DomainError::from(AuthError::EmailAlreadyRegistered).kind(),
            ErrorKind::Conflict
        );
    }

    #[test]
    fn test_token_errors_are_unauthorized() {
        assert_eq!(DomainError::from(TokenError::TokenExpired).kind(), ErrorKind::Unauthorized);
        assert_eq!(DomainError::from(TokenError::InvalidToken).kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_validation_and_infrastructure_kinds() {
        assert_eq!(
            DomainError::from(ValidationError::PasswordMismatch).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(DomainError::Database("boom".into()).kind(), ErrorKind::Internal);
        assert_eq!(
            DomainError::ExternalService { message: "down".into() }.kind(),
            ErrorKind::ExternalService
        );
    }

    #[test]
    fn test_transparent_messages() {
        let err = DomainError::from(AuthError::InsufficientRole { required: Role::Admin });
        assert_eq!(err.to_string(), "Access denied: admin role required");

        let err = DomainError::from(ValidationError::PasswordTooShort { min: 8 });
        assert_eq!(err.to_string(), "Password must be at least 8 characters long");
    }

    #[test]
    fn test_validation_error_fields() {
        assert_eq!(ValidationError::InvalidEmail.field(), "email");
        assert_eq!(ValidationError::PasswordPattern.field(), "password");
        assert_eq!(ValidationError::PasswordMismatch.field(), "password_2");
    }
}
