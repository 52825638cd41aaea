//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints including:
//! - Token issuance (`/token`, `/login`)
//! - Registration
//! - Logout
//! - The current identity (`/users/me`)

pub mod login;
pub mod logout;
pub mod me;
pub mod register;
pub mod token;

use actix_web::cookie::{Cookie, SameSite};

use recipe_shared::SessionConfig;

/// HTTP-only cookie carrying an issued access token
pub(crate) fn session_cookie(config: &SessionConfig, token: &str) -> Cookie<'static> {
    Cookie::build(config.cookie_name.clone(), token.to_string())
        .path("/")
        .http_only(config.http_only)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .finish()
}

/// Cookie that makes the browser drop the session cookie
pub(crate) fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build(config.cookie_name.clone(), "")
        .path("/")
        .http_only(config.http_only)
        .finish();
    cookie.make_removal();
    cookie
}
