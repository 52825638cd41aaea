pub mod catalog;
pub mod recipe;
pub mod user;

pub use catalog::CatalogRepository;
pub use recipe::RecipeRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use catalog::MockCatalogRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use recipe::MockRecipeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user::MockUserRepository;
