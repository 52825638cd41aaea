//! Translation of domain errors into HTTP responses

use actix_web::{http::StatusCode, HttpResponse};
use validator::ValidationErrors;

use recipe_core::errors::{DomainError, ErrorKind, TokenError};
use recipe_shared::{error_codes, ErrorResponse};

/// HTTP status for an error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorKind::ExternalService => StatusCode::BAD_GATEWAY,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses.
///
/// Internal and upstream failures are logged in full but answered with a
/// generic message.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let kind = error.kind();
    let status = status_for(kind);

    let body = match (&error, kind) {
        (_, ErrorKind::Internal) => {
            log::error!("Internal error: {}", error);
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "Internal server error")
        }
        (_, ErrorKind::ExternalService) => {
            log::error!("Upstream error: {}", error);
            ErrorResponse::new(
                error_codes::UPSTREAM_ERROR,
                "Recipe generator is unavailable, please try again later",
            )
        }
        (DomainError::Token(TokenError::TokenExpired), _) => {
            ErrorResponse::new(error_codes::TOKEN_EXPIRED, error.to_string())
        }
        (DomainError::Token(_), _) => {
            ErrorResponse::new(error_codes::TOKEN_INVALID, error.to_string())
        }
        (DomainError::ValidationErr(validation), _) => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, error.to_string())
                .add_detail("field", validation.field())
        }
        (_, ErrorKind::Unauthorized) => {
            ErrorResponse::new(error_codes::UNAUTHORIZED, error.to_string())
        }
        (_, ErrorKind::Forbidden) => ErrorResponse::new(error_codes::FORBIDDEN, error.to_string()),
        (_, ErrorKind::Conflict) => ErrorResponse::new(error_codes::CONFLICT, error.to_string()),
        (_, ErrorKind::BadRequest) => {
            ErrorResponse::new(error_codes::BAD_REQUEST, error.to_string())
        }
    };

    if status.is_client_error() {
        log::warn!("Request rejected ({}): {}", status.as_u16(), body.message);
    }

    HttpResponse::build(status).json(body)
}

/// Answer a DTO that failed `validator` checks with 400 and the failing fields
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();

    log::warn!("Validation failed for fields: {:?}", fields);

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("fields", fields),
    )
}
