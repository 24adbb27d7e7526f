//! Catalog document model.
//!
//! Typed, serde-backed views of the documents held by the external content
//! store (product, variant, category, color, size). Field names follow the
//! store's wire shape (`_id`, `_ref`, `isFeatured`, ...), so these types can
//! be decoded straight out of query results and serialized straight into
//! mutations.
//!
//! The store is the sole owner of persisted documents; everything here is a
//! transient, request-scoped copy with no write-back responsibility.

pub mod category;
pub mod color;
pub mod product;
pub mod reference;
pub mod size;
pub mod variant;

pub use category::Category;
pub use color::Color;
pub use product::{Product, Slug};
pub use reference::{Image, Reference};
pub use size::{Size, SizeCode};
pub use variant::{ensure_unique_skus, Variant};
