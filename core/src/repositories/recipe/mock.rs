//! In-memory implementation of RecipeRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Recipe;
use crate::errors::DomainError;

use super::trait_::RecipeRepository;

/// Mock recipe repository for testing
#[derive(Clone, Default)]
pub struct MockRecipeRepository {
    recipes: Arc<RwLock<Vec<Recipe>>>,
}

impl MockRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeRepository for MockRecipeRepository {
    async fn find_by_user(&self, user_id: Uuid, limit: usize) -> Result<Vec<Recipe>, DomainError> {
        let recipes = self.recipes.read().await;
        Ok(recipes
            .iter()
            .filter(|r| r.user_id == user_id)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn create(&self, recipe: Recipe) -> Result<Recipe, DomainError> {
        self.recipes.write().await.push(recipe.clone());
        Ok(recipe)
    }
}
