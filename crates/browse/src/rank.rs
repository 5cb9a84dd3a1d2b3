//! Search result ranking.
//!
//! Orders a product sequence against a free-text query. The ranker is an
//! ordering, never a filter: products that do not match at all are retained
//! and sorted to the back (tier 3). Callers that want exclusion compose
//! with the filter pipeline instead.

use storefront_catalog::Product;

/// String-match quality of a product name against a query.
///
/// Variant order is rank order: `Exact` sorts before `Prefix`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Name equals the query exactly.
    Exact,
    /// Name starts with the query.
    Prefix,
    /// Name contains the query as a substring.
    Substring,
    /// No match; the product is still retained.
    None,
}

impl MatchTier {
    /// Classify a lowercased name against a normalized (trimmed, lowercased,
    /// non-empty) query.
    pub fn classify(name: &str, query: &str) -> Self {
        if name == query {
            Self::Exact
        } else if name.starts_with(query) {
            Self::Prefix
        } else if name.contains(query) {
            Self::Substring
        } else {
            Self::None
        }
    }
}

/// Order products by match quality against `query`.
///
/// Length-preserving: never drops or duplicates elements. The query is
/// trimmed and lowercased; an empty query returns the input order
/// unchanged. Otherwise products sort ascending by tier, ties break by
/// lexicographic comparison of the lowercased name, and equal names keep
/// their original relative order (the sort is stable, which is what makes
/// the output reproducible).
pub fn rank<'a, I>(products: I, query: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let query = query.trim().to_lowercase();
    let collected: Vec<&Product> = products.into_iter().collect();
    if query.is_empty() {
        return collected;
    }

    // Decorate once with (tier, lowercased name) so the sort does not
    // re-lowercase on every comparison.
    let mut keyed: Vec<(MatchTier, String, &Product)> = collected
        .into_iter()
        .map(|p| {
            let name = p.name.to_lowercase();
            (MatchTier::classify(&name, &query), name, p)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    keyed.into_iter().map(|(_, _, p)| p).collect()
}
