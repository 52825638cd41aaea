//! Authentication service module
//!
//! This module provides the account side of authentication:
//! - Email/password verification against stored bcrypt hashes
//! - Token issuance on login
//! - Account registration with input validation

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, RegistrationRequest};
