//! Application state and factory
//!
//! This module holds the shared services handed to every handler and
//! provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use recipe_core::repositories::{CatalogRepository, RecipeRepository, UserRepository};
use recipe_core::services::{AuthGuard, AuthService, RecipeGenerator, RecipeService};
use recipe_shared::{error_codes, CorsConfig, ErrorResponse, SessionConfig};

use crate::middleware::cors::create_cors;
use crate::routes::{auth, food_gpt, recipes};

/// Services shared by all handlers
pub struct AppState<U, C, R, G>
where
    U: UserRepository,
    C: CatalogRepository,
    R: RecipeRepository,
    G: RecipeGenerator,
{
    pub auth_service: Arc<AuthService<U>>,
    pub auth_guard: Arc<AuthGuard<U>>,
    pub recipe_service: Arc<RecipeService<C, R, G>>,
    pub session: SessionConfig,
}

impl<U, C, R, G> AppState<U, C, R, G>
where
    U: UserRepository,
    C: CatalogRepository,
    R: RecipeRepository,
    G: RecipeGenerator,
{
    pub fn new(
        auth_service: Arc<AuthService<U>>,
        auth_guard: Arc<AuthGuard<U>>,
        recipe_service: Arc<RecipeService<C, R, G>>,
        session: SessionConfig,
    ) -> Self {
        Self {
            auth_service,
            auth_guard,
            recipe_service,
            session,
        }
    }
}

/// Register every route. Split out of [`create_app`] so tests can mount the
/// routes without CORS.
pub fn configure<U, C, R, G>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    cfg.route("/health", web::get().to(health_check))
        .service(
            web::scope("/auth")
                .route("/token", web::post().to(auth::token::access_token::<U, C, R, G>))
                .route("/login", web::post().to(auth::login::login::<U, C, R, G>))
                .route("/logout", web::get().to(auth::logout::logout::<U, C, R, G>))
                .route("/register", web::post().to(auth::register::register::<U, C, R, G>))
                .route("/users/me", web::get().to(auth::me::current_user::<U, C, R, G>)),
        )
        .service(
            web::scope("/recipes")
                .route("/ingredients", web::get().to(recipes::ingredients::<U, C, R, G>))
                .route("/category", web::get().to(recipes::category::<U, C, R, G>))
                .route("/cuisines", web::get().to(recipes::cuisines::<U, C, R, G>))
                .route("/add-ingredients", web::post().to(recipes::add_ingredients::<U, C, R, G>))
                .route("/add-cuisines", web::post().to(recipes::add_cuisines::<U, C, R, G>))
                .route("/add-food_type", web::post().to(recipes::add_food_type::<U, C, R, G>))
                .route("/my-recipes", web::get().to(recipes::my_recipes::<U, C, R, G>))
                .route("/my-recipes", web::post().to(recipes::save_recipe::<U, C, R, G>)),
        )
        .service(
            web::scope("/food-gpt")
                .route("/recipe", web::post().to(food_gpt::suggest_recipe::<U, C, R, G>)),
        );
}

/// Create and configure the application with all dependencies
pub fn create_app<U, C, R, G>(
    app_state: web::Data<AppState<U, C, R, G>>,
    cors: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    C: CatalogRepository + 'static,
    R: RecipeRepository + 'static,
    G: RecipeGenerator + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(create_cors(cors))
        .wrap(Logger::default())
        .configure(configure::<U, C, R, G>)
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "recipe-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
