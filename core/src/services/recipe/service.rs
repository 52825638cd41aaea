//! Recipe service: reference data, saved recipes and suggestions

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{CatalogItem, CatalogKind, Recipe};
use crate::errors::{DomainError, DomainResult, TokenError, ValidationError};
use crate::repositories::{CatalogRepository, RecipeRepository};

use super::generator::RecipeGenerator;
use super::prompt::build_prompt;

/// Maximum number of entries returned by a catalog listing
pub const CATALOG_LIST_LIMIT: usize = 100;

/// Maximum number of recipes returned for one user
pub const RECIPE_LIST_LIMIT: usize = 100;

/// Input of a recipe suggestion
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub food_type: String,
    pub cuisine: String,
    pub ingredients: Vec<String>,
}

pub struct RecipeService<C, R, G>
where
    C: CatalogRepository,
    R: RecipeRepository,
    G: RecipeGenerator,
{
    catalog_repository: Arc<C>,
    recipe_repository: Arc<R>,
    generator: Arc<G>,
}

impl<C, R, G> RecipeService<C, R, G>
where
    C: CatalogRepository,
    R: RecipeRepository,
    G: RecipeGenerator,
{
    pub fn new(catalog_repository: Arc<C>, recipe_repository: Arc<R>, generator: Arc<G>) -> Self {
        Self {
            catalog_repository,
            recipe_repository,
            generator,
        }
    }

    /// Names in the `kind` list
    pub async fn list_catalog(&self, kind: CatalogKind) -> DomainResult<Vec<String>> {
        self.catalog_repository
            .list_names(kind, CATALOG_LIST_LIMIT)
            .await
    }

    /// Add `names` to the `kind` list after capitalizing them.
    ///
    /// The whole batch is rejected if it is empty or any name is blank.
    pub async fn add_catalog_items(&self, kind: CatalogKind, names: Vec<String>) -> DomainResult<usize> {
        if names.is_empty() {
            return Err(ValidationError::EmptyList {
                field: kind.table().to_string(),
            }
            .into());
        }
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(ValidationError::InvalidFormat {
                field: kind.table().to_string(),
            }
            .into());
        }

        let items: Vec<CatalogItem> = names.iter().map(|name| CatalogItem::new(name)).collect();
        let inserted = self.catalog_repository.insert_many(kind, items).await?;

        tracing::info!(kind = kind.table(), inserted, "Catalog items added");
        Ok(inserted)
    }

    /// Recipes saved by the account with id `user_id`
    pub async fn my_recipes(&self, user_id: &str) -> DomainResult<Vec<Recipe>> {
        let user_id = parse_user_id(user_id)?;
        self.recipe_repository
            .find_by_user(user_id, RECIPE_LIST_LIMIT)
            .await
    }

    /// Save a recipe for the account with id `user_id`
    pub async fn save_recipe(&self, user_id: &str, title: String, text: String) -> DomainResult<Recipe> {
        let user_id = parse_user_id(user_id)?;

        if title.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "recipe_title".to_string(),
            }
            .into());
        }
        if text.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "text".to_string(),
            }
            .into());
        }

        self.recipe_repository
            .create(Recipe::new(user_id, title, text))
            .await
    }

    /// Ask the generator for a recipe matching the request
    pub async fn suggest_recipe(&self, request: SuggestionRequest) -> DomainResult<String> {
        if request.food_type.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "food_type".to_string(),
            }
            .into());
        }
        if request.cuisine.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "cuisine".to_string(),
            }
            .into());
        }
        if request.ingredients.is_empty() {
            return Err(ValidationError::EmptyList {
                field: "ingredients".to_string(),
            }
            .into());
        }

        let prompt = build_prompt(&request.food_type, &request.ingredients, &request.cuisine);

        self.generator.generate(&prompt).await.map_err(|e| match e {
            DomainError::ExternalService { .. } => e,
            other => {
                tracing::error!(error = %other, "Recipe generator failed");
                DomainError::ExternalService {
                    message: other.to_string(),
                }
            }
        })
    }
}

fn parse_user_id(user_id: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(user_id).map_err(|_| DomainError::Token(TokenError::InvalidToken))
}
