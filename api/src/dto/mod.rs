pub mod auth;
pub mod recipe;

pub use auth::{LoginForm, LoginResponse, RegisterForm};
pub use recipe::{
    RecipeListResponse, RecipeResponse, SaveRecipeRequest,
    SuggestRecipeRequest, SuggestRecipeResponse,
};
