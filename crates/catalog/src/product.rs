use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

/// Effective brand when neither `brand` nor `manufacturer` is present.
pub const UNKNOWN_BRAND: &str = "Unknown";

/// Stock count below which a product is classified as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Upper bound on the quantity a single order line may carry.
pub const MAX_ORDER_QUANTITY: u32 = 10;

/// Star rating shown for an unrated product.
///
/// Deliberately different from the rating the filter pipeline assumes for
/// unrated products (0, see [`Product::filter_rating`]); both defaults are
/// preserved from the shipped behavior.
const DISPLAY_RATING_FALLBACK: f32 = 4.0;

const MAX_STARS: f32 = 5.0;

/// Coarse stock classification used for display badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    OutOfStock,
    Low,
    Available,
}

/// A product record as captured in a catalog snapshot.
///
/// Immutable for the duration of a ranking/filtering pass: no component of
/// the browse pipeline mutates a `Product`, and output lists borrow from the
/// snapshot rather than copying records. Optional fields model attributes
/// the remote catalog may omit; each one resolves to a documented default
/// where the domain needs a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Non-empty display name; searched case-insensitively.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Price in smallest currency unit (e.g., cents).
    pub price_cents: u64,
    /// Average rating in `[0, 5]`; absent = unrated.
    #[serde(default)]
    pub rating: Option<f32>,
    /// Units on hand; absent = unknown (treated as 0 where a count is needed).
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub reviews: Option<u32>,
}

impl Product {
    /// Resolve the effective brand via the fallback chain
    /// `brand` → `manufacturer` → [`UNKNOWN_BRAND`].
    ///
    /// Total: always returns a non-empty value, so brand comparisons never
    /// have to handle absence inline.
    pub fn effective_brand(&self) -> &str {
        self.brand
            .as_deref()
            .or(self.manufacturer.as_deref())
            .unwrap_or(UNKNOWN_BRAND)
    }

    /// Units on hand, with unknown stock counted as 0.
    pub fn stock_units(&self) -> u32 {
        self.stock.unwrap_or(0)
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock_units() > 0
    }

    /// Classify stock for display badges.
    pub fn stock_level(&self) -> StockLevel {
        match self.stock_units() {
            0 => StockLevel::OutOfStock,
            n if n < LOW_STOCK_THRESHOLD => StockLevel::Low,
            _ => StockLevel::Available,
        }
    }

    /// Whole stars to render for this product.
    ///
    /// Unrated products display as 4 stars. This is *not* the default the
    /// rating filter uses; see [`Self::filter_rating`].
    pub fn display_stars(&self) -> u8 {
        self.rating
            .unwrap_or(DISPLAY_RATING_FALLBACK)
            .clamp(0.0, MAX_STARS)
            .floor() as u8
    }

    /// Whole-star rating as seen by the minimum-rating filter predicate.
    ///
    /// Unrated products count as 0 here, so a minimum-rating constraint
    /// excludes them.
    pub fn filter_rating(&self) -> u8 {
        self.rating.unwrap_or(0.0).clamp(0.0, MAX_STARS).floor() as u8
    }

    /// Quantities a buyer may select for this product:
    /// `1..=min(stock, MAX_ORDER_QUANTITY)`.
    ///
    /// Empty for an out-of-stock product.
    pub fn purchasable_quantities(&self) -> core::ops::RangeInclusive<u32> {
        1..=self.stock_units().min(MAX_ORDER_QUANTITY)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
