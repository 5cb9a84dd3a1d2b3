use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

/// Constraint on a text attribute: admit everything, or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a concrete attribute value satisfies this selection.
    /// Exact match, no normalization.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

/// Stock-status constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    #[default]
    All,
    InStock,
    OutOfStock,
}

/// Structured filter set supplied by the presentation layer.
///
/// Criteria are a value object: the pipeline reads them and never writes
/// back. A zero `max_price_cents` or `min_rating` means "no constraint",
/// mirroring the unset state of the corresponding controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub category: Selection,
    /// Inclusive upper price bound in the smallest currency unit;
    /// 0 = unconstrained.
    pub max_price_cents: u64,
    /// Minimum whole-star rating, compared against
    /// [`Product::filter_rating`](storefront_catalog::Product::filter_rating);
    /// 0 = unconstrained, 1..=5 meaningful.
    pub min_rating: u8,
    pub stock: StockStatus,
    /// Compared against the product's effective brand.
    pub brand: Selection,
    /// Governs quota padding: whether the display list may repeat items to
    /// fill the quota.
    pub allow_repeats: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: Selection::All,
            max_price_cents: 0,
            min_rating: 0,
            stock: StockStatus::All,
            brand: Selection::All,
            allow_repeats: true,
        }
    }
}

impl FilterCriteria {
    /// True when no predicate constrains the result set.
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_all()
            && self.max_price_cents == 0
            && self.min_rating == 0
            && self.stock == StockStatus::All
            && self.brand.is_all()
    }
}

impl ValueObject for FilterCriteria {}
