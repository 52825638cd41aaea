//! Recipe service module
//!
//! - Ingredient, cuisine and food type lists
//! - Recipes saved per account
//! - Recipe suggestions from an external text generator

mod generator;
mod prompt;
mod service;


pub use generator::RecipeGenerator;
#[cfg(any(test, feature = "test-utils"))]
pub use generator::StubRecipeGenerator;
pub use prompt::build_prompt;
pub use service::{RecipeService, SuggestionRequest, CATALOG_LIST_LIMIT, RECIPE_LIST_LIMIT};
