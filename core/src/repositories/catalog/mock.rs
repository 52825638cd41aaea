//! In-memory implementation of CatalogRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{CatalogItem, CatalogKind};
use crate::errors::DomainError;

use super::trait_::CatalogRepository;

/// Mock catalog repository keeping insertion order per kind
#[derive(Clone, Default)]
pub struct MockCatalogRepository {
    items: Arc<RwLock<HashMap<CatalogKind, Vec<CatalogItem>>>>,
}

impl MockCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogRepository for MockCatalogRepository {
    async fn list_names(
        &self,
        kind: CatalogKind,
        limit: usize,
    ) -> Result<Vec<String>, DomainError> {
        let items = self.items.read().await;
        Ok(items
            .get(&kind)
            .map(|list| list.iter().take(limit).map(|i| i.name.clone()).collect())
            .unwrap_or_default())
    }

    async fn insert_many(
        &self,
        kind: CatalogKind,
        new_items: Vec<CatalogItem>,
    ) -> Result<usize, DomainError> {
        let count = new_items.len();
        self.items
            .write()
            .await
            .entry(kind)
            .or_default()
            .extend(new_items);
        Ok(count)
    }
}
