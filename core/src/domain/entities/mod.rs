//! Domain entities representing core business objects.

pub mod catalog;
pub mod recipe;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use catalog::{capitalize, CatalogItem, CatalogKind};
pub use recipe::Recipe;
pub use token::{Claims, Identity, DEFAULT_TOKEN_EXPIRY_MINUTES, LOGIN_TOKEN_EXPIRY_MINUTES};
pub use user::{Role, User};
