//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Token signing and session cookie configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `llm` - Generative-text provider used for recipe suggestions
//! - `server` - HTTP server and CORS configuration
//!
//! Every section is read once at process start. Missing required values are
//! reported as a [`ConfigError`] and abort startup.

pub mod auth;
pub mod database;
pub mod environment;
pub mod llm;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, SessionConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use llm::LlmConfig;
pub use server::{CorsConfig, ServerConfig};

/// Errors raised while loading configuration from the environment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Read a required environment variable, treating empty values as missing
pub(crate) fn required_var(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name.to_string())),
    }
}

/// Read an optional environment variable and parse it, falling back to `default`
pub(crate) fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Recipe suggestion provider
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            llm: LlmConfig::from_env()?,
        })
    }
}
