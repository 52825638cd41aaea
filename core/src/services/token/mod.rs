//! Token service module for JWT management
//!
//! This module handles issuing and verifying HMAC-signed access tokens.
//! There is no refresh or revocation: a token stays valid until it expires.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
