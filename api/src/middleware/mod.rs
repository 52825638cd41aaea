pub mod auth;
pub mod cors;

pub use auth::{AuthorizationHeader, BearerToken};
pub use cors::create_cors;
