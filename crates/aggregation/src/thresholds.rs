//! Stock thresholds.
//!
//! These boundaries are fixed, not configurable, and are deliberately the
//! single source of truth for both the filter resolver and the aggregation
//! engine — the two must never disagree on what "low stock" means.

/// A variant is low-stock when `stock < LOW_STOCK`.
pub const LOW_STOCK: u32 = 10;

/// A variant is out of stock when `stock == OUT_OF_STOCK`.
pub const OUT_OF_STOCK: u32 = 0;

/// A variant is high-stock when `stock > HIGH_STOCK`.
pub const HIGH_STOCK: u32 = 50;
