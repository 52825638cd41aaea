//! Configuration for the token service

use std::str::FromStr;

use jsonwebtoken::Algorithm;
use recipe_shared::JwtConfig;

use crate::domain::entities::token::{DEFAULT_TOKEN_EXPIRY_MINUTES, LOGIN_TOKEN_EXPIRY_MINUTES};
use crate::errors::{DomainError, DomainResult};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm, always one of the HMAC family
    pub algorithm: Algorithm,
    /// Lifetime of tokens issued without an explicit ttl
    pub default_ttl_minutes: i64,
    /// Lifetime of tokens issued on login
    pub login_ttl_minutes: i64,
}

impl TokenServiceConfig {
    /// Create a configuration with the default lifetimes
    pub fn new(jwt_secret: impl Into<String>, algorithm: Algorithm) -> DomainResult<Self> {
        ensure_hmac(algorithm)?;
        Ok(Self {
            jwt_secret: jwt_secret.into(),
            algorithm,
            default_ttl_minutes: DEFAULT_TOKEN_EXPIRY_MINUTES,
            login_ttl_minutes: LOGIN_TOKEN_EXPIRY_MINUTES,
        })
    }

    /// Build from the process configuration, rejecting unknown or
    /// asymmetric algorithms
    pub fn from_jwt_config(config: &JwtConfig) -> DomainResult<Self> {
        let algorithm = Algorithm::from_str(config.algorithm.trim()).map_err(|_| {
            DomainError::internal(format!("Unknown signing algorithm: {}", config.algorithm))
        })?;

        let mut token_config = Self::new(config.secret.clone(), algorithm)?;
        token_config.default_ttl_minutes = config.access_token_expiry_minutes;
        token_config.login_ttl_minutes = config.login_token_expiry_minutes;
        Ok(token_config)
    }
}

fn ensure_hmac(algorithm: Algorithm) -> DomainResult<()> {
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(()),
        other => Err(DomainError::internal(format!(
            "Unsupported signing algorithm: {:?} (only HS256, HS384 and HS512 are accepted)",
            other
        ))),
    }
}
