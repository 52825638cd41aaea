use actix_web::{web, HttpResponse};

use recipe_core::repositories::{CatalogRepository, RecipeRepository, UserRepository};
use recipe_core::services::RecipeGenerator;
use recipe_shared::MessageResponse;

use crate::app::AppState;

use super::removal_cookie;

/// Handler for GET /auth/logout
///
/// Clears the `access_token` cookie. Issued tokens stay valid until they
/// expire.
pub async fn logout<U, C, R, G>(state: web::Data<AppState<U, C, R, G>>) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    HttpResponse::Ok()
        .cookie(removal_cookie(&state.session))
        .json(MessageResponse::new("Logged out"))
}
