use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

use crate::product::Product;

/// One cart entry: a product at a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total_cents(&self) -> u64 {
        self.product.price_cents * u64::from(self.quantity)
    }
}

/// Pure cart arithmetic over a set of lines.
///
/// Synchronizing the cart with the remote account is an external concern;
/// this type only models the in-memory reductions (subtotal, item count)
/// the storefront derives from whatever the remote returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a product at the given quantity, merging with an existing line
    /// for the same product id.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine { product, quantity });
        }
    }

    /// Remove the line for a product id; unknown ids are a no-op.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price × quantity` across all lines, in the smallest
    /// currency unit.
    pub fn subtotal_cents(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total_cents).sum()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
