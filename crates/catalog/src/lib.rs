//! Catalog domain module.
//!
//! This crate contains the product record model and the pure helpers around
//! it (snapshot derivations, stock classification, cart arithmetic),
//! implemented as deterministic domain logic (no IO, no HTTP, no storage).

pub mod cart;
pub mod product;
pub mod snapshot;

pub use cart::{Cart, CartLine};
pub use product::{Product, StockLevel, LOW_STOCK_THRESHOLD, MAX_ORDER_QUANTITY, UNKNOWN_BRAND};
pub use snapshot::CatalogSnapshot;
