//! Derived inventory statistics.

use serde::{Deserialize, Serialize};

use stocklens_core::DocumentId;

/// Product count for one category. Categories with no matching products are
/// included with a zero count, never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category_id: DocumentId,
    pub name: String,
    pub product_count: u64,
}

/// One entry of the ranked low-stock product list: a product and the summed
/// stock of all its variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStockSummary {
    pub product_id: DocumentId,
    pub name: String,
    pub total_stock: u64,
}

/// The transient result of one aggregation request.
///
/// Created fresh on every call to [`crate::summarize`] and handed to the
/// caller; never cached or persisted by the engine itself. Callers that want
/// a last-good copy (e.g. a dashboard surviving a failed refresh) keep their
/// own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSnapshot {
    pub total_products: u64,
    pub total_variants: u64,

    /// Variants with `stock < thresholds::LOW_STOCK`.
    pub low_stock_variant_count: u64,

    /// Variants with `stock == thresholds::OUT_OF_STOCK`.
    pub out_of_stock_count: u64,

    /// Per-category product distribution, in the categories' input order.
    pub categories: Vec<CategoryCount>,

    /// The ≤5 products with the lowest summed variant stock, ascending.
    pub lowest_stock_products: Vec<ProductStockSummary>,
}

impl AggregateSnapshot {
    /// Snapshot of an empty store: all counts zero, empty lists.
    pub fn empty() -> Self {
        Self {
            total_products: 0,
            total_variants: 0,
            low_stock_variant_count: 0,
            out_of_stock_count: 0,
            categories: Vec::new(),
            lowest_stock_products: Vec::new(),
        }
    }
}
