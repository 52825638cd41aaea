//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer of the Recipe API.
//! It provides concrete implementations of the core repository traits and
//! of the recipe text generator port.
//!
//! ## Architecture
//!
//! - **Database**: MySQL implementations using SQLx
//! - **LLM**: OpenAI-compatible chat completions client using reqwest
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use std::sync::Arc;

use recipe_shared::AppConfig;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Recipe generator backed by a chat completions API
pub mod llm;

#[cfg(feature = "mysql")]
use database::{
    ensure_tables, DatabasePool, MySqlCatalogRepository, MySqlRecipeRepository,
    MySqlUserRepository,
};
use llm::OpenAiRecipeGenerator;

/// Infrastructure service container handed to the API layer
#[cfg(feature = "mysql")]
#[derive(Clone)]
pub struct InfrastructureServices {
    pub pool: DatabasePool,
    pub users: Arc<MySqlUserRepository>,
    pub catalog: Arc<MySqlCatalogRepository>,
    pub recipes: Arc<MySqlRecipeRepository>,
    pub generator: Arc<OpenAiRecipeGenerator>,
}

/// Initialize infrastructure services
///
/// This function sets up:
/// - The database connection pool
/// - Missing tables and indexes
/// - Repository implementations sharing the pool
/// - The recipe generator HTTP client
#[cfg(feature = "mysql")]
pub async fn initialize(config: &AppConfig) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!("Initializing infrastructure services...");

    let pool = DatabasePool::new(config.database.clone()).await?;
    ensure_tables(pool.get_pool()).await?;

    if !config.llm.is_configured() {
        tracing::warn!("LLM_API_KEY is not set; recipe suggestions will fail");
    }
    let generator = OpenAiRecipeGenerator::new(config.llm.clone())?;

    let services = InfrastructureServices {
        users: Arc::new(MySqlUserRepository::new(pool.get_pool().clone())),
        catalog: Arc::new(MySqlCatalogRepository::new(pool.get_pool().clone())),
        recipes: Arc::new(MySqlRecipeRepository::new(pool.get_pool().clone())),
        generator: Arc::new(generator),
        pool,
    };

    tracing::info!("Infrastructure services initialized successfully");
    Ok(services)
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
