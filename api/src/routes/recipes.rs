//! Catalog and saved-recipe handlers under `/recipes`
//!
//! Listing endpoints need any valid bearer token. The `add-*` endpoints
//! need an account that currently holds the admin role.

use actix_web::{web, HttpResponse};
use validator::Validate;

use recipe_core::domain::entities::{CatalogKind, Role};
use recipe_core::repositories::{CatalogRepository, RecipeRepository, UserRepository};
use recipe_core::services::RecipeGenerator;
use recipe_shared::MessageResponse;

use crate::app::AppState;
use crate::dto::{RecipeListResponse, RecipeResponse, SaveRecipeRequest};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::{AuthorizationHeader, BearerToken};

async fn list_catalog<U, C, R, G>(
    state: &AppState<U, C, R, G>,
    token: &BearerToken,
    kind: CatalogKind,
    key: &str,
) -> HttpResponse
where
    U: UserRepository,
    C: CatalogRepository,
    R: RecipeRepository,
    G: RecipeGenerator,
{
    if let Err(error) = state.auth_guard.require_authenticated(token.as_deref()) {
        return handle_domain_error(error);
    }

    match state.recipe_service.list_catalog(kind).await {
        Ok(names) => HttpResponse::Ok().json(serde_json::json!({ key: names })),
        Err(error) => handle_domain_error(error),
    }
}

async fn add_catalog_items<U, C, R, G>(
    state: &AppState<U, C, R, G>,
    authorization: &AuthorizationHeader,
    kind: CatalogKind,
    names: Vec<String>,
) -> HttpResponse
where
    U: UserRepository,
    C: CatalogRepository,
    R: RecipeRepository,
    G: RecipeGenerator,
{
    let admin = match state
        .auth_guard
        .require_role(authorization.as_deref(), Role::Admin)
        .await
    {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state.recipe_service.add_catalog_items(kind, names).await {
        Ok(count) => {
            log::info!("Admin {} added {} {}", admin.id, count, kind.table());
            HttpResponse::Ok().json(MessageResponse::new(format!(
                "{} {} added successfully",
                count,
                kind.label()
            )))
        }
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /recipes/ingredients
pub async fn ingredients<U, C, R, G>(
    state: web::Data<AppState<U, C, R, G>>,
    token: BearerToken,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    list_catalog(state.get_ref(), &token, CatalogKind::Ingredient, "ingredients").await
}

/// Handler for GET /recipes/category
///
/// Lists food types under the `category` key.
pub async fn category<U, C, R, G>(
    state: web::Data<AppState<U, C, R, G>>,
    token: BearerToken,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    list_catalog(state.get_ref(), &token, CatalogKind::FoodType, "category").await
}

/// Handler for GET /recipes/cuisines
pub async fn cuisines<U, C, R, G>(
    state: web::Data<AppState<U, C, R, G>>,
    token: BearerToken,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    list_catalog(state.get_ref(), &token, CatalogKind::Cuisine, "cuisines").await
}

/// Handler for POST /recipes/add-ingredients
///
/// # Request Body
///
/// ```json
/// ["tomato", "basil"]
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "2 Ingredients added successfully"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Empty list or blank name
/// - 401 Unauthorized: Missing or invalid token, or the account is gone
/// - 403 Forbidden: Account is not an admin
pub async fn add_ingredients<U, C, R, G>(
    state: web::Data<AppState<U, C, R, G>>,
    authorization: AuthorizationHeader,
    names: web::Json<Vec<String>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    add_catalog_items(
        state.get_ref(),
        &authorization,
        CatalogKind::Ingredient,
        names.into_inner(),
    )
    .await
}

/// Handler for POST /recipes/add-cuisines
pub async fn add_cuisines<U, C, R, G>(
    state: web::Data<AppState<U, C, R, G>>,
    authorization: AuthorizationHeader,
    names: web::Json<Vec<String>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    add_catalog_items(
        state.get_ref(),
        &authorization,
        CatalogKind::Cuisine,
        names.into_inner(),
    )
    .await
}

/// Handler for POST /recipes/add-food_type
pub async fn add_food_type<U, C, R, G>(
    state: web::Data<AppState<U, C, R, G>>,
    authorization: AuthorizationHeader,
    names: web::Json<Vec<String>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    add_catalog_items(
        state.get_ref(),
        &authorization,
        CatalogKind::FoodType,
        names.into_inner(),
    )
    .await
}

/// Handler for GET /recipes/my-recipes
///
/// Recipes owned by the account named in the token, oldest first.
pub async fn my_recipes<U, C, R, G>(
    state: web::Data<AppState<U, C, R, G>>,
    token: BearerToken,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    let identity = match state.auth_guard.require_authenticated(token.as_deref()) {
        Ok(identity) => identity,
        Err(error) => return handle_domain_error(error),
    };

    match state.recipe_service.my_recipes(&identity.id).await {
        Ok(recipes) => HttpResponse::Ok().json(RecipeListResponse {
            recipes: recipes.into_iter().map(RecipeResponse::from).collect(),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /recipes/my-recipes
///
/// # Request Body
///
/// ```json
/// {
///     "recipe_title": "Tomato soup",
///     "text": "..."
/// }
/// ```
///
/// Answers 201 with the saved recipe.
pub async fn save_recipe<U, C, R, G>(
    state: web::Data<AppState<U, C, R, G>>,
    token: BearerToken,
    request: web::Json<SaveRecipeRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    let identity = match state.auth_guard.require_authenticated(token.as_deref()) {
        Ok(identity) => identity,
        Err(error) => return handle_domain_error(error),
    };

    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let SaveRecipeRequest { recipe_title, text } = request.into_inner();
    match state
        .recipe_service
        .save_recipe(&identity.id, recipe_title, text)
        .await
    {
        Ok(recipe) => HttpResponse::Created().json(RecipeResponse::from(recipe)),
        Err(error) => handle_domain_error(error),
    }
}
