//! Data access gateway for the external content store.
//!
//! Two seams, layered:
//! - [`gateway::ContentStore`]: the low-level contract — opaque query and
//!   mutation descriptors passed through to the store, errors surfaced
//!   unchanged, no state retained between calls, no retries.
//! - [`source::CatalogSource`]: the typed seam consumed by the rest of the
//!   service. [`source::GroqCatalog`] implements it over any `ContentStore`
//!   by building GROQ queries; [`memory::InMemoryCatalog`] implements it over
//!   plain vectors for tests and local development.
//!
//! Both are injected explicitly (no process-wide client singleton).

pub mod error;
pub mod gateway;
pub mod groq;
pub mod http;
pub mod memory;
pub mod source;

pub use error::StoreError;
pub use gateway::{Ack, ContentStore, MutationResult, MutationSpec, QuerySpec, ResultSet};
pub use http::{HttpContentStore, StoreConfig};
pub use memory::InMemoryCatalog;
pub use source::{CatalogSource, GroqCatalog, ProductDetail};
