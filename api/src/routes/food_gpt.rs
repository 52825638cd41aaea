use actix_web::{web, HttpResponse};
use validator::Validate;

use recipe_core::repositories::{CatalogRepository, RecipeRepository, UserRepository};
use recipe_core::services::RecipeGenerator;

use crate::app::AppState;
use crate::dto::{SuggestRecipeRequest, SuggestRecipeResponse};
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::middleware::BearerToken;

/// Handler for POST /food-gpt/recipe
///
/// # Request Body
///
/// ```json
/// {
///     "food_type": "Dinner",
///     "cuisine": "Italian",
///     "ingredients": ["Tomato", "Basil"]
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "recipe": "..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing field or empty ingredient list
/// - 401 Unauthorized: Missing or invalid token
/// - 502 Bad Gateway: The generator failed or is not configured
pub async fn suggest_recipe<U, C, R, G>(
    state: web::Data<AppState<U, C, R, G>>,
    token: BearerToken,
    request: web::Json<SuggestRecipeRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    if let Err(error) = state.auth_guard.require_authenticated(token.as_deref()) {
        return handle_domain_error(error);
    }

    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .recipe_service
        .suggest_recipe(request.into_inner().into())
        .await
    {
        Ok(recipe) => HttpResponse::Ok().json(SuggestRecipeResponse { recipe }),
        Err(error) => handle_domain_error(error),
    }
}
