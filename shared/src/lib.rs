//! Shared utilities and common types for the Recipe API server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures
//! - Credential validation rules (email format, password strength)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig, LlmConfig,
    ServerConfig, SessionConfig,
};
pub use errors::{error_codes, ErrorResponse, MessageResponse};
pub use utils::validation;
