//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Lifetime of a token issued without an explicit ttl (15 minutes)
pub const DEFAULT_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Lifetime of a token issued by the login endpoints (60 minutes)
pub const LOGIN_TOKEN_EXPIRY_MINUTES: i64 = 60;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account email)
    pub sub: String,

    /// Account id
    pub id: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `email`/`user_id` expiring after `ttl`
    pub fn new(email: impl Into<String>, user_id: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiry = now + ttl;

        Self {
            sub: email.into(),
            id: user_id.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// The identity these claims assert
    pub fn identity(&self) -> Identity {
        Identity {
            email: self.sub.clone(),
            id: self.id.clone(),
        }
    }
}

/// Caller identity recovered from a verified token.
///
/// Nothing here was re-checked against the store; the account may have been
/// removed since the token was issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub id: String,
}
