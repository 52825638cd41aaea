//! Business services containing domain logic and use cases.

pub mod auth;
pub mod guard;
pub mod password;
pub mod recipe;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, RegistrationRequest};
pub use guard::{extract_bearer_token, AuthGuard};
pub use password::PasswordHasher;
pub use recipe::{build_prompt, RecipeGenerator, RecipeService, SuggestionRequest};
#[cfg(any(test, feature = "test-utils"))]
pub use recipe::StubRecipeGenerator;
pub use token::{TokenService, TokenServiceConfig};
