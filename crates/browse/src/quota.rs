//! Quota padding for sparse result sets.
//!
//! Guarantees a visually full recommendation panel even when a filter
//! narrows the catalog to a handful of items, while bounding the panel at
//! [`DISPLAY_CAP`] and never inflating a large result set beyond what it
//! already has up to that cap.

use storefront_catalog::Product;

/// Hard upper bound on the display list length.
pub const DISPLAY_CAP: usize = 40;

/// Minimum display quota that cyclic padding tries to satisfy.
pub const REPEAT_QUOTA: usize = 30;

/// Produce a bounded display list from a filtered sequence, falling back to
/// the unfiltered pool when filtering matched nothing.
///
/// - Empty source (both `filtered` and `fallback` empty): empty output.
///   This is an explicit early return; termination must not depend on the
///   cycling loop's condition.
/// - `allow_repeats == false`: the first `min(40, |source|)` elements in
///   order, which may fall short of any nominal minimum.
/// - `allow_repeats == true`: cycle through the source with wraparound
///   (`i % |source|`) until `min(40, max(30, |source|))` elements are
///   collected: zero or more full cycles plus a prefix of the next.
pub fn pad<'a>(
    filtered: &[&'a Product],
    fallback: &[&'a Product],
    allow_repeats: bool,
) -> Vec<&'a Product> {
    let source = if filtered.is_empty() { fallback } else { filtered };
    if source.is_empty() {
        return Vec::new();
    }

    if !allow_repeats {
        return source.iter().copied().take(DISPLAY_CAP).collect();
    }

    let desired = DISPLAY_CAP.min(REPEAT_QUOTA.max(source.len()));
    (0..desired).map(|i| source[i % source.len()]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    fn product(name: &str) -> Product {
        Product {
            id: ProductId::new(),
            name: name.to_string(),
            description: None,
            category: None,
            price_cents: 1000,
            rating: None,
            stock: None,
            brand: None,
            manufacturer: None,
            image: None,
            reviews: None,
        }
    }

    fn pool(n: usize) -> Vec<Product> {
        (0..n).map(|i| product(&format!("p{i}"))).collect()
    }

    #[test]
    fn empty_filtered_and_fallback_returns_empty_without_looping() {
        assert!(pad(&[], &[], true).is_empty());
        assert!(pad(&[], &[], false).is_empty());
    }

    #[test]
    fn worked_example_seven_items_pad_to_thirty() {
        let products = pool(7);
        let source: Vec<&Product> = products.iter().collect();
        let padded = pad(&source, &source, true);
        // Four full cycles (28) plus the first two of a fifth.
        assert_eq!(padded.len(), 30);
        for (i, p) in padded.iter().enumerate() {
            assert!(std::ptr::eq(*p, source[i % 7]));
        }
    }

    #[test]
    fn worked_example_no_repeats_passes_five_through() {
        let products = pool(5);
        let filtered: Vec<&Product> = products.iter().collect();
        let fallback = pool(40);
        let fallback_refs: Vec<&Product> = fallback.iter().collect();
        let padded = pad(&filtered, &fallback_refs, false);
        assert_eq!(padded.len(), 5);
        for (i, p) in padded.iter().enumerate() {
            assert!(std::ptr::eq(*p, filtered[i]));
        }
    }

    #[test]
    fn empty_filtered_falls_back_to_the_pool() {
        let products = pool(3);
        let fallback: Vec<&Product> = products.iter().collect();
        let padded = pad(&[], &fallback, true);
        assert_eq!(padded.len(), REPEAT_QUOTA);
        assert!(std::ptr::eq(padded[0], fallback[0]));
    }

    #[test]
    fn large_source_is_capped_but_never_inflated() {
        let products = pool(35);
        let source: Vec<&Product> = products.iter().collect();
        // 35 is above the quota already: no padding happens.
        assert_eq!(pad(&source, &source, true).len(), 35);

        let products = pool(60);
        let source: Vec<&Product> = products.iter().collect();
        assert_eq!(pad(&source, &source, true).len(), DISPLAY_CAP);
        assert_eq!(pad(&source, &source, false).len(), DISPLAY_CAP);
    }

    #[test]
    fn no_repeat_output_never_duplicates() {
        let products = pool(8);
        let source: Vec<&Product> = products.iter().collect();
        let padded = pad(&source, &source, false);
        assert_eq!(padded.len(), 8);
        let unique: std::collections::HashSet<ProductId> =
            padded.iter().map(|p| p.id).collect();
        assert_eq!(unique.len(), 8);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: with repeats, output length is exactly
            /// min(40, max(30, k)) for a non-empty source of size k, and
            /// every element is the source element at `i mod k`.
            #[test]
            fn repeat_padding_hits_the_quota_bounds(k in 1usize..80) {
                let products = pool(k);
                let source: Vec<&Product> = products.iter().collect();
                let padded = pad(&source, &source, true);
                prop_assert_eq!(padded.len(), DISPLAY_CAP.min(REPEAT_QUOTA.max(k)));
                for (i, p) in padded.iter().enumerate() {
                    prop_assert!(std::ptr::eq(*p, source[i % k]));
                }
            }

            /// Property: without repeats, output is the first
            /// min(40, k) source elements.
            #[test]
            fn no_repeat_padding_truncates_in_order(k in 1usize..80) {
                let products = pool(k);
                let source: Vec<&Product> = products.iter().collect();
                let padded = pad(&source, &source, false);
                prop_assert_eq!(padded.len(), DISPLAY_CAP.min(k));
                for (i, p) in padded.iter().enumerate() {
                    prop_assert!(std::ptr::eq(*p, source[i]));
                }
            }
        }
    }
}
