//! Reference flows composing the browse primitives.
//!
//! Two independent call sites compose ranking, filtering, and padding
//! differently and are kept as separate entry points:
//!
//! - the **search flow** ranks the whole catalog against a query and hands
//!   it straight to display (no filtering, no padding);
//! - the **recommendation flow** builds a candidate pool around the product
//!   being viewed, filters it, and pads the result up to the display quota.
//!
//! Both are pure functions over a snapshot: the caller decides when inputs
//! changed and invokes them again.

use tracing::debug;

use storefront_catalog::Product;

use crate::criteria::FilterCriteria;
use crate::filter::filter;
use crate::quota::{pad, DISPLAY_CAP};
use crate::rank::rank;

/// A padded recommendation list plus the count shown next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations<'a> {
    pub items: Vec<&'a Product>,
    /// Count displayed in the results badge: the padded length, falling
    /// back to the pool size when the padded list is empty.
    pub result_count: usize,
}

/// Search flow: rank the catalog against a free-text query.
///
/// Length-preserving; non-matching products are ordered to the back rather
/// than excluded.
pub fn search<'a>(catalog: &'a [Product], query: &str) -> Vec<&'a Product> {
    let ranked = rank(catalog, query);
    debug!(
        query = query.trim(),
        results = ranked.len(),
        "search flow ranked catalog"
    );
    ranked
}

/// Build the recommendation candidate pool for the product being viewed:
/// every other product, same-category items first, then the rest, each
/// group in catalog order, capped at [`DISPLAY_CAP`] before filtering.
pub fn candidate_pool<'a>(catalog: &'a [Product], current: &Product) -> Vec<&'a Product> {
    let others: Vec<&Product> = catalog.iter().filter(|p| p.id != current.id).collect();
    let mut pool: Vec<&Product> = others
        .iter()
        .copied()
        .filter(|p| p.category == current.category)
        .collect();
    pool.extend(others.iter().copied().filter(|p| p.category != current.category));
    pool.truncate(DISPLAY_CAP);
    pool
}

/// Recommendation flow: build the candidate pool, filter it, pad to the
/// display quota.
pub fn recommend<'a>(
    catalog: &'a [Product],
    current: &Product,
    criteria: &FilterCriteria,
) -> Recommendations<'a> {
    let pool = candidate_pool(catalog, current);
    let filtered = filter(pool.iter().copied(), criteria);
    let items = pad(&filtered, &pool, criteria.allow_repeats);
    let result_count = if items.is_empty() { pool.len() } else { items.len() };
    debug!(
        pool = pool.len(),
        filtered = filtered.len(),
        shown = items.len(),
        unconstrained = criteria.is_unconstrained(),
        "recommendation flow computed"
    );
    Recommendations {
        items,
        result_count,
    }
}
