//! Authentication and session configuration

use serde::{Deserialize, Serialize};

use super::{parsed_var, required_var, ConfigError};

/// Default bcrypt work factor, mirrors `bcrypt::DEFAULT_COST`
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Work factors bcrypt accepts
pub const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// JWT signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key used to sign and verify tokens
    pub secret: String,

    /// Signing algorithm name (e.g. "HS256")
    pub algorithm: String,

    /// Lifetime of tokens issued without an explicit ttl, in minutes
    #[serde(default = "default_access_token_expiry_minutes")]
    pub access_token_expiry_minutes: i64,

    /// Lifetime of tokens issued by the login endpoints, in minutes
    #[serde(default = "default_login_token_expiry_minutes")]
    pub login_token_expiry_minutes: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret and algorithm
    pub fn new(secret: impl Into<String>, algorithm: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: algorithm.into(),
            access_token_expiry_minutes: default_access_token_expiry_minutes(),
            login_token_expiry_minutes: default_login_token_expiry_minutes(),
        }
    }

    /// Create from the `SECRET_KEY` and `ALGORITHM` environment variables.
    ///
    /// Both are required: a server without a signing key cannot issue or
    /// verify a single token.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = required_var("SECRET_KEY")?;
        let algorithm = required_var("ALGORITHM")?;

        Ok(Self {
            access_token_expiry_minutes: parsed_var(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                default_access_token_expiry_minutes(),
            )?,
            login_token_expiry_minutes: parsed_var(
                "LOGIN_TOKEN_EXPIRE_MINUTES",
                default_login_token_expiry_minutes(),
            )?,
            ..Self::new(secret, algorithm)
        })
    }

    /// Set the default token lifetime in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = minutes;
        self
    }

    /// Set the login token lifetime in minutes
    pub fn with_login_expiry_minutes(mut self, minutes: i64) -> Self {
        self.login_token_expiry_minutes = minutes;
        self
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Name of the cookie holding the access token
    pub cookie_name: String,

    /// Session cookie secure flag (HTTPS only)
    pub secure: bool,

    /// Session cookie HttpOnly flag
    #[serde(default = "default_http_only")]
    pub http_only: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from("access_token"),
            secure: false,
            http_only: default_http_only(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// bcrypt work factor for password hashing
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let bcrypt_cost = parsed_var("BCRYPT_COST", default_bcrypt_cost())?;

        Ok(Self {
            jwt: JwtConfig::from_env()?,
            session: SessionConfig {
                secure: parsed_var("SESSION_COOKIE_SECURE", false)?,
                ..SessionConfig::default()
            },
            bcrypt_cost: checked_bcrypt_cost(bcrypt_cost)?,
        })
    }

    /// Build an auth configuration around an explicit JWT configuration
    pub fn with_jwt(jwt: JwtConfig) -> Self {
        Self {
            jwt,
            session: SessionConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn checked_bcrypt_cost(cost: u32) -> Result<u32, ConfigError> {
    if BCRYPT_COST_RANGE.contains(&cost) {
        Ok(cost)
    } else {
        Err(ConfigError::InvalidValue {
            name: "BCRYPT_COST".to_string(),
            value: cost.to_string(),
        })
    }
}

fn default_access_token_expiry_minutes() -> i64 {
    15
}

fn default_login_token_expiry_minutes() -> i64 {
    60
}

fn default_http_only() -> bool {
    true
}

fn default_bcrypt_cost() -> u32 {
    DEFAULT_BCRYPT_COST
}
