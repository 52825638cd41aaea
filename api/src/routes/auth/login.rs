use actix_web::{web, HttpResponse};

use recipe_core::repositories::{CatalogRepository, RecipeRepository, UserRepository};
use recipe_core::services::RecipeGenerator;

use crate::app::AppState;
use crate::dto::{LoginForm, LoginResponse};
use crate::handlers::handle_domain_error;

/// Handler for POST /auth/login
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "Logged in",
///     "token": "eyJhbGciOiJIUzI1NiJ9..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: `username` or `password` missing
/// - 401 Unauthorized: Unknown email or wrong password
pub async fn login<U, C, R, G>(
    state: web::Data<AppState<U, C, R, G>>,
    form: web::Form<LoginForm>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    match state.auth_service.login(&form.username, &form.password).await {
        Ok(token) => HttpResponse::Ok().json(LoginResponse::new(token)),
        Err(error) => handle_domain_error(error),
    }
}
