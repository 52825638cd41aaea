//! # Recipe API Core
//!
//! Core business logic and domain layer for the Recipe API backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::entities::{
    CatalogItem, CatalogKind, Claims, Identity, Recipe, Role, User,
};
pub use errors::{
    AuthError, DomainError, DomainResult, ErrorKind, TokenError, ValidationError,
};
pub use repositories::{CatalogRepository, RecipeRepository, UserRepository};
pub use services::{
    AuthGuard, AuthService, AuthServiceConfig, PasswordHasher, RecipeGenerator, RecipeService,
    RegistrationRequest, SuggestionRequest, TokenService, TokenServiceConfig,
};
