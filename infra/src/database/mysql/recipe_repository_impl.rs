//! MySQL implementation of the RecipeRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use recipe_core::domain::entities::Recipe;
use recipe_core::errors::DomainError;
use recipe_core::repositories::RecipeRepository;

use super::db_error;

pub struct MySqlRecipeRepository {
    pool: MySqlPool,
}

impl MySqlRecipeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_recipe(row: &sqlx::mysql::MySqlRow) -> Result<Recipe, DomainError> {
        let parse_uuid = |column: &str| -> Result<Uuid, DomainError> {
            let value: String = row
                .try_get(column)
                .map_err(|e| DomainError::Database(format!("Failed to get {}: {}", column, e)))?;
            Uuid::parse_str(&value)
                .map_err(|e| DomainError::Database(format!("Invalid UUID in {}: {}", column, e)))
        };

        Ok(Recipe {
            id: parse_uuid("id")?,
            user_id: parse_uuid("user_id")?,
            recipe_title: row
                .try_get("recipe_title")
                .map_err(|e| DomainError::Database(format!("Failed to get recipe_title: {}", e)))?,
            text: row
                .try_get("text")
                .map_err(|e| DomainError::Database(format!("Failed to get text: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl RecipeRepository for MySqlRecipeRepository {
    async fn find_by_user(&self, user_id: Uuid, limit: usize) -> Result<Vec<Recipe>, DomainError> {
        let query = r#"
            SELECT id, recipe_title, text, user_id, created_at
            FROM recipes
            WHERE user_id = ?
            ORDER BY created_at
            LIMIT ?
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(limit as u64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to load recipes", e))?;

        rows.iter().map(Self::row_to_recipe).collect()
    }

    async fn create(&self, recipe: Recipe) -> Result<Recipe, DomainError> {
        let query = r#"
            INSERT INTO recipes (id, recipe_title, text, user_id, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(recipe.id.to_string())
            .bind(&recipe.recipe_title)
            .bind(&recipe.text)
            .bind(recipe.user_id.to_string())
            .bind(recipe.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to create recipe", e))?;

        Ok(recipe)
    }
}
