//! Catalog repository trait for the ingredient, cuisine and food type lists.

use async_trait::async_trait;

use crate::domain::entities::{CatalogItem, CatalogKind};
use crate::errors::DomainError;

/// Repository trait for the reference lists
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Names stored for `kind`, at most `limit` of them
    async fn list_names(&self, kind: CatalogKind, limit: usize)
        -> Result<Vec<String>, DomainError>;

    /// Insert `items` into the list for `kind`, returning how many were stored
    async fn insert_many(
        &self,
        kind: CatalogKind,
        items: Vec<CatalogItem>,
    ) -> Result<usize, DomainError>;
}
