//! Request extractors for bearer-token authentication.
//!
//! Extraction never fails: handlers decide what an absent token means by
//! passing it to [`AuthGuard`](recipe_core::services::AuthGuard). The
//! current-user endpoint treats it as "no identity" while recipe routes
//! reject it.

use actix_web::{dev::Payload, http::header::AUTHORIZATION, Error, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use recipe_core::services::extract_bearer_token;

/// Raw `Authorization` header value, if present and valid UTF-8
#[derive(Debug, Clone, Default)]
pub struct AuthorizationHeader(pub Option<String>);

impl AuthorizationHeader {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequest for AuthorizationHeader {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        ready(Ok(AuthorizationHeader(header)))
    }
}

/// Token taken from an `Authorization: Bearer <token>` header
#[derive(Debug, Clone, Default)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequest for BearerToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(extract_bearer_token)
            .map(str::to_string);

        ready(Ok(BearerToken(token)))
    }
}
