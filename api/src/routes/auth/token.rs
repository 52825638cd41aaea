use actix_web::{web, HttpResponse};

use recipe_core::repositories::{CatalogRepository, RecipeRepository, UserRepository};
use recipe_core::services::RecipeGenerator;

use crate::app::AppState;
use crate::dto::LoginForm;
use crate::handlers::handle_domain_error;

use super::session_cookie;

/// Handler for POST /auth/token
///
/// Exchanges form credentials for a 60-minute access token. The token is
/// returned as a bare JSON string and also stored in the `access_token`
/// cookie.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// "eyJhbGciOiJIUzI1NiJ9..."
/// ```
///
/// Unknown email or wrong password also answer 200, with a `null` body.
pub async fn access_token<U, C, R, G>(
    state: web::Data<AppState<U, C, R, G>>,
    form: web::Form<LoginForm>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    match state
        .auth_service
        .issue_access_token(&form.username, &form.password)
        .await
    {
        Ok(Some(token)) => HttpResponse::Ok()
            .cookie(session_cookie(&state.session, &token))
            .json(token),
        Ok(None) => HttpResponse::Ok().json(serde_json::Value::Null),
        Err(error) => handle_domain_error(error),
    }
}
