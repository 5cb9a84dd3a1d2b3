//! Composable predicate filtering.
//!
//! Five independent boolean predicates combined by logical AND. Each
//! predicate is pure and commutative with the others: applying them in any
//! order yields the same set. Input order is preserved and an empty result
//! is a valid, non-error output.

use storefront_catalog::Product;

use crate::criteria::{FilterCriteria, Selection, StockStatus};

/// Keep if no category is selected or the product's category matches
/// exactly. A product without a category only passes the `All` selection.
pub fn category_matches(product: &Product, criteria: &FilterCriteria) -> bool {
    match (&criteria.category, product.category.as_deref()) {
        (Selection::All, _) => true,
        (Selection::Only(wanted), Some(category)) => wanted == category,
        (Selection::Only(_), None) => false,
    }
}

/// Keep if no price bound is set (0) or the price is within the inclusive
/// bound.
pub fn price_matches(product: &Product, criteria: &FilterCriteria) -> bool {
    criteria.max_price_cents == 0 || product.price_cents <= criteria.max_price_cents
}

/// Keep if no rating floor is set (0) or the product's whole-star filter
/// rating reaches it. Unrated products count as 0 stars here.
pub fn rating_matches(product: &Product, criteria: &FilterCriteria) -> bool {
    criteria.min_rating == 0 || product.filter_rating() >= criteria.min_rating
}

/// Keep according to the stock-status constraint. Unknown stock counts as
/// 0 units: it fails `InStock` and passes `OutOfStock`.
pub fn stock_matches(product: &Product, criteria: &FilterCriteria) -> bool {
    match criteria.stock {
        StockStatus::All => true,
        StockStatus::InStock => product.stock_units() > 0,
        StockStatus::OutOfStock => product.stock_units() == 0,
    }
}

/// Keep if no brand is selected or the effective brand (after the
/// `brand → manufacturer → "Unknown"` fallback) matches exactly.
pub fn brand_matches(product: &Product, criteria: &FilterCriteria) -> bool {
    criteria.brand.admits(product.effective_brand())
}

/// Conjunction of all five predicates.
pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    category_matches(product, criteria)
        && price_matches(product, criteria)
        && rating_matches(product, criteria)
        && stock_matches(product, criteria)
        && brand_matches(product, criteria)
}

/// Reduce a product sequence to the elements satisfying every predicate,
/// preserving input order.
pub fn filter<'a, I>(products: I, criteria: &FilterCriteria) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| matches(p, criteria))
        .collect()
}
