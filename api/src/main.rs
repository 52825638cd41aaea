use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use recipe_api::app::{create_app, AppState};
use recipe_core::services::{
    AuthGuard, AuthService, AuthServiceConfig, RecipeService, TokenService, TokenServiceConfig,
};
use recipe_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Recipe API Server");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!("Environment: {}", config.environment);
    if config.environment.is_production() && !config.auth.session.secure {
        log::warn!("Session cookie is sent without the Secure flag");
    }

    let token_config = TokenServiceConfig::from_jwt_config(&config.auth.jwt)
        .context("Invalid token signing configuration")?;
    let token_service = Arc::new(TokenService::new(token_config));

    let infra = recipe_infra::initialize(&config)
        .await
        .context("Failed to initialize infrastructure")?;
    info!("Database pool: {}", infra.pool.get_statistics());

    let auth_service = Arc::new(AuthService::new(
        infra.users.clone(),
        token_service.clone(),
        AuthServiceConfig::from(&config.auth),
    ));
    let auth_guard = Arc::new(AuthGuard::new(infra.users.clone(), token_service));
    let recipe_service = Arc::new(RecipeService::new(
        infra.catalog.clone(),
        infra.recipes.clone(),
        infra.generator.clone(),
    ));

    let app_state = web::Data::new(AppState::new(
        auth_service,
        auth_guard,
        recipe_service,
        config.auth.session.clone(),
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors = config.server.cors.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    infra.pool.close().await;
    info!("Server stopped");
    Ok(())
}
