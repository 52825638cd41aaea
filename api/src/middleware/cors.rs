//! CORS middleware configuration for cross-origin requests.
//!
//! The browser frontend sends the `access_token` cookie, so credentials are
//! allowed and origins must be listed explicitly.

use actix_cors::Cors;

use recipe_shared::CorsConfig;

/// Creates a CORS middleware instance from the configured origin list.
///
/// Any method and header is accepted from an allowed origin.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(config.max_age);

    for origin in &config.allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
