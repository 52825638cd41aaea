//! JSON bodies of the `/recipes` and `/food-gpt` endpoints

use serde::{Deserialize, Serialize};
use validator::Validate;

use recipe_core::domain::entities::Recipe;
use recipe_core::services::SuggestionRequest;

/// Body of `POST /recipes/my-recipes`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveRecipeRequest {
    #[validate(length(min = 1, max = 255))]
    pub recipe_title: String,

    #[validate(length(min = 1, max = 20000))]
    pub text: String,
}

/// A saved recipe with ids rendered as strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub id: String,
    pub recipe_title: String,
    pub text: String,
    pub user_id: String,
    pub created_at: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            recipe_title: recipe.recipe_title,
            text: recipe.text,
            user_id: recipe.user_id.to_string(),
            created_at: recipe.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<RecipeResponse>,
}

/// Body of `POST /food-gpt/recipe`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SuggestRecipeRequest {
    #[validate(length(min = 1, max = 100))]
    pub food_type: String,

    #[validate(length(min = 1, max = 100))]
    pub cuisine: String,

    #[validate(length(min = 1, max = 50))]
    pub ingredients: Vec<String>,
}

impl From<SuggestRecipeRequest> for SuggestionRequest {
    fn from(request: SuggestRecipeRequest) -> Self {
        SuggestionRequest {
            food_type: request.food_type,
            cuisine: request.cuisine,
            ingredients: request.ingredients,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestRecipeResponse {
    pub recipe: String,
}
