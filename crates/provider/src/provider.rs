//! The catalog provider capability.

use thiserror::Error;

use storefront_catalog::Product;
use storefront_core::ProductId;

/// Failure at the provider boundary.
///
/// Callers that degrade gracefully translate `Unavailable` into an empty
/// snapshot; the browse core tolerates empty sequences by design.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// No product with the requested id.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// The catalog source could not be reached or answered malformed data.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Async capability for fetching product data.
///
/// Implementations make no ordering promises: the browse core re-derives
/// order from whatever sequence comes back, so providers may return
/// arbitrarily-ordered snapshots.
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the full catalog.
    async fn fetch_all(&self) -> Result<Vec<Product>, ProviderError>;

    /// Fetch the products of one category (exact match).
    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Product>, ProviderError>;

    /// Provider-side name search (case-insensitive substring). The search
    /// flow still re-ranks the result locally.
    async fn search(&self, query: &str) -> Result<Vec<Product>, ProviderError>;

    /// Fetch a single product by id.
    async fn fetch(&self, id: ProductId) -> Result<Product, ProviderError>;
}
