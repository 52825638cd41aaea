use actix_web::{web, HttpResponse};

use recipe_core::repositories::{CatalogRepository, RecipeRepository, UserRepository};
use recipe_core::services::RecipeGenerator;
use recipe_shared::MessageResponse;

use crate::app::AppState;
use crate::dto::RegisterForm;
use crate::handlers::handle_domain_error;

/// Handler for POST /auth/register
///
/// # Request Body (form)
///
/// `email`, `username`, `password`, `password_2`
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "User created successfully"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Missing field, passwords differ, invalid email or weak password
/// - 409 Conflict: Email already registered
/// - 500 Internal Server Error: Storage failure
pub async fn register<U, C, R, G>(
    state: web::Data<AppState<U, C, R, G>>,
    form: web::Form<RegisterForm>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    match state.auth_service.register(form.into_inner().into()).await {
        Ok(user) => {
            log::info!("Registered account {}", user.id);
            HttpResponse::Ok().json(MessageResponse::new("User created successfully"))
        }
        Err(error) => handle_domain_error(error),
    }
}
