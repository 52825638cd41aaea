//! MySQL implementation of the CatalogRepository trait.
//!
//! Each [`CatalogKind`] lives in its own table; the table name comes from a
//! fixed enum, never from user input.

use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};

use recipe_core::domain::entities::{CatalogItem, CatalogKind};
use recipe_core::errors::DomainError;
use recipe_core::repositories::CatalogRepository;

use super::db_error;

pub struct MySqlCatalogRepository {
    pool: MySqlPool,
}

impl MySqlCatalogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for MySqlCatalogRepository {
    async fn list_names(
        &self,
        kind: CatalogKind,
        limit: usize,
    ) -> Result<Vec<String>, DomainError> {
        let query = format!(
            "SELECT name FROM {} ORDER BY created_at, name LIMIT ?",
            kind.table()
        );

        let rows = sqlx::query(&query)
            .bind(limit as u64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to list catalog items", e))?;

        rows.iter()
            .map(|row| {
                row.try_get::<String, _>("name")
                    .map_err(|e| DomainError::Database(format!("Failed to get name: {}", e)))
            })
            .collect()
    }

    async fn insert_many(
        &self,
        kind: CatalogKind,
        items: Vec<CatalogItem>,
    ) -> Result<usize, DomainError> {
        if items.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<MySql> =
            QueryBuilder::new(format!("INSERT INTO {} (id, name) ", kind.table()));
        builder.push_values(&items, |mut row, item| {
            row.push_bind(item.id.to_string()).push_bind(item.name.clone());
        });

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to insert catalog items", e))?;

        Ok(result.rows_affected() as usize)
    }
}
