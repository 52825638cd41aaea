//! Database module - MySQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Table bootstrap for a fresh database
//! - Repository pattern implementations

pub mod connection;
pub mod mysql;
pub mod schema;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlCatalogRepository, MySqlRecipeRepository, MySqlUserRepository};
pub use schema::ensure_tables;
