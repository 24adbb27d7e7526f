//! Inventory aggregation core.
//!
//! This crate contains business rules only, implemented as deterministic,
//! IO-free computation over already-fetched documents (no HTTP, no storage):
//! - `thresholds`: the stock boundaries shared by filtering and aggregation
//! - `filter`: named filter modes resolved to query predicates
//! - `engine`: `summarize()`, reducing fetched documents to a snapshot
//! - `snapshot`: the derived statistics handed to callers

pub mod engine;
pub mod filter;
pub mod snapshot;
pub mod thresholds;

pub use engine::summarize;
pub use filter::{FilterError, FilterMode, Predicate};
pub use snapshot::{AggregateSnapshot, CategoryCount, ProductStockSummary};
