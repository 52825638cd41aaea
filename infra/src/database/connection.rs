//! MySQL connection pool bootstrap

use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, Connection, MySqlPool};
use tracing::log::LevelFilter;

use recipe_shared::DatabaseConfig;

use crate::InfrastructureError;

/// Shared handle to the store. Clones share one pool.
#[derive(Clone)]
pub struct DatabasePool {
    pool: MySqlPool,
    config: DatabaseConfig,
}

impl DatabasePool {
    /// Open a pool sized and timed by `config`.
    ///
    /// A malformed URL is a configuration error; an unreachable server is a
    /// database error.
    pub async fn new(config: DatabaseConfig) -> Result<Self, InfrastructureError> {
        let options = connect_options(&config)?;

        tracing::info!(
            max_connections = config.max_connections,
            "Opening MySQL pool"
        );

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout))
            .idle_timeout(Some(Duration::from_secs(config.idle_timeout)))
            .max_lifetime(Some(Duration::from_secs(config.max_lifetime)))
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "MySQL pool could not connect");
                InfrastructureError::Database(e)
            })?;

        Ok(Self { pool, config })
    }

    pub fn get_pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Round-trip one pooled connection to the server
    pub async fn ping(&self) -> Result<(), InfrastructureError> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }

    pub fn get_statistics(&self) -> PoolStatistics {
        PoolStatistics {
            open: self.pool.size(),
            idle: self.pool.num_idle(),
            max: self.config.max_connections,
        }
    }

    /// Wait for checked-out connections to return, then close them all
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("MySQL pool closed");
    }
}

/// Parse the URL and log statements at debug, slow ones at warn
fn connect_options(config: &DatabaseConfig) -> Result<MySqlConnectOptions, InfrastructureError> {
    let options = MySqlConnectOptions::from_str(&config.url)
        .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?;

    Ok(options.log_statements(LevelFilter::Debug).log_slow_statements(
        LevelFilter::Warn,
        Duration::from_millis(config.slow_query_threshold),
    ))
}

/// Point-in-time pool occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatistics {
    pub open: u32,
    pub idle: usize,
    pub max: u32,
}

impl std::fmt::Display for PoolStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {} connections open, {} idle", self.open, self.max, self.idle)
    }
}
