//! Recipe repository trait for user-owned recipes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Recipe;
use crate::errors::DomainError;

/// Repository trait for Recipe entity persistence operations
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Recipes owned by `user_id`, at most `limit` of them
    async fn find_by_user(&self, user_id: Uuid, limit: usize) -> Result<Vec<Recipe>, DomainError>;

    /// Persist a new recipe
    async fn create(&self, recipe: Recipe) -> Result<Recipe, DomainError>;
}
