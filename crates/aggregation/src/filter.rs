//! Filter resolver: named filter modes → query predicates.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::thresholds;

/// Filter resolution error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// An unrecognized filter mode was requested. Never silently defaults to
    /// [`FilterMode::All`].
    #[error("invalid filter mode: {0}")]
    InvalidFilterMode(String),
}

/// Named product filter modes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    All,
    LowStock,
    OutOfStock,
    HighStock,
}

impl FilterMode {
    /// Resolve a mode into the predicate the gateway executes. Total and pure.
    pub fn resolve(self) -> Predicate {
        match self {
            FilterMode::All => Predicate::Any,
            FilterMode::LowStock => Predicate::AnyVariantStockBelow(thresholds::LOW_STOCK),
            FilterMode::OutOfStock => Predicate::AnyVariantStockEquals(thresholds::OUT_OF_STOCK),
            FilterMode::HighStock => Predicate::AnyVariantStockAbove(thresholds::HIGH_STOCK),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::LowStock => "low",
            FilterMode::OutOfStock => "out",
            FilterMode::HighStock => "high",
        }
    }
}

impl FromStr for FilterMode {
    type Err = FilterError;

    /// Accepts the mode strings the studio's filter dropdown used.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterMode::All),
            "low" => Ok(FilterMode::LowStock),
            "out" => Ok(FilterMode::OutOfStock),
            "high" => Ok(FilterMode::HighStock),
            other => Err(FilterError::InvalidFilterMode(other.to_string())),
        }
    }
}

impl core::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product-selection predicate over the product's variant stock counts.
///
/// `Any` selects every product. The stock variants select products having at
/// least one variant whose stock satisfies the comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Predicate {
    Any,
    AnyVariantStockBelow(u32),
    AnyVariantStockEquals(u32),
    AnyVariantStockAbove(u32),
}

impl Predicate {
    /// Evaluate against the stock counts of one product's variants.
    ///
    /// `Any` matches regardless of the iterator's contents (a product with no
    /// variants still matches `Any`).
    pub fn matches(&self, variant_stocks: impl IntoIterator<Item = u32>) -> bool {
        match *self {
            Predicate::Any => true,
            Predicate::AnyVariantStockBelow(limit) => {
                variant_stocks.into_iter().any(|stock| stock < limit)
            }
            Predicate::AnyVariantStockEquals(value) => {
                variant_stocks.into_iter().any(|stock| stock == value)
            }
            Predicate::AnyVariantStockAbove(floor) => {
                variant_stocks.into_iter().any(|stock| stock > floor)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_total_and_uses_fixed_boundaries() {
        assert_eq!(FilterMode::All.resolve(), Predicate::Any);
        assert_eq!(
            FilterMode::LowStock.resolve(),
            Predicate::AnyVariantStockBelow(10)
        );
        assert_eq!(
            FilterMode::OutOfStock.resolve(),
            Predicate::AnyVariantStockEquals(0)
        );
        assert_eq!(
            FilterMode::HighStock.resolve(),
            Predicate::AnyVariantStockAbove(50)
        );
    }

    #[test]
    fn unknown_mode_fails_instead_of_defaulting() {
        let err = "everything".parse::<FilterMode>().unwrap_err();
        assert_eq!(err, FilterError::InvalidFilterMode("everything".to_string()));
    }

    #[test]
    fn boundary_stocks() {
        // `< 10`: 9 matches, 10 does not.
        let low = FilterMode::LowStock.resolve();
        assert!(low.matches([9]));
        assert!(!low.matches([10]));

        // `== 0`: only an exactly-zero variant matches.
        let out = FilterMode::OutOfStock.resolve();
        assert!(out.matches([0, 100]));
        assert!(!out.matches([1]));

        // `> 50`: 51 matches, 50 does not.
        let high = FilterMode::HighStock.resolve();
        assert!(high.matches([51]));
        assert!(!high.matches([50]));
    }

    #[test]
    fn any_matches_product_without_variants() {
        assert!(Predicate::Any.matches([]));
        assert!(!Predicate::AnyVariantStockBelow(10).matches([]));
    }
}
