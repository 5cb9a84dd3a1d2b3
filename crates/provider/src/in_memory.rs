//! In-memory catalog provider for tests/dev.

use storefront_catalog::Product;
use storefront_core::ProductId;

use crate::provider::{CatalogProvider, ProviderError};

/// In-memory provider over a fixed product list.
///
/// - No IO
/// - Returns products in insertion order (callers re-derive order anyway)
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait::async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn fetch_all(&self) -> Result<Vec<Product>, ProviderError> {
        Ok(self.products.clone())
    }

    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Product>, ProviderError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category.as_deref() == Some(category))
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, ProviderError> {
        let needle = query.trim().to_lowercase();
        Ok(self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn fetch(&self, id: ProductId) -> Result<Product, ProviderError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ProviderError::NotFound(id))
    }
}
