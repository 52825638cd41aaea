use actix_web::{web, HttpResponse};

use recipe_core::repositories::{CatalogRepository, RecipeRepository, UserRepository};
use recipe_core::services::RecipeGenerator;

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::BearerToken;

/// Handler for GET /auth/users/me
///
/// Returns the identity carried by the bearer token, `{"email", "id"}`,
/// or `null` when no token is sent. An invalid or expired token is 401.
/// The account itself is not looked up.
pub async fn current_user<U, C, R, G>(
    state: web::Data<AppState<U, C, R, G>>,
    token: BearerToken,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    match state.auth_guard.identify(token.as_deref()) {
        Ok(identity) => HttpResponse::Ok().json(identity),
        Err(error) => handle_domain_error(error),
    }
}
