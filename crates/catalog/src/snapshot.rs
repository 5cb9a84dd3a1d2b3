use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

use crate::product::Product;

/// An in-memory snapshot of the product catalog.
///
/// Snapshots are supplied by the catalog provider and replaced wholesale on
/// refresh, never patched in place. The browse pipeline borrows from a
/// snapshot for the duration of one pass; recomputation always starts from
/// the current snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    products: Vec<Product>,
    fetched_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    pub fn new(products: Vec<Product>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            products,
            fetched_at,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories in first-seen order (the toolbar dropdown source).
    ///
    /// Products without a category contribute nothing.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for category in self.products.iter().filter_map(|p| p.category.as_deref()) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Distinct effective brands in first-seen order (the filter drawer
    /// source). Products without brand data contribute `"Unknown"` once.
    pub fn brands(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for brand in self.products.iter().map(Product::effective_brand) {
            if !seen.contains(&brand) {
                seen.push(brand);
            }
        }
        seen
    }
}
