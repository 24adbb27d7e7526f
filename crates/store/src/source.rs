//! Typed catalog access seam.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use stocklens_aggregation::Predicate;
use stocklens_catalog::{Category, Product, Variant};
use stocklens_core::DocumentId;

use crate::error::StoreError;
use crate::gateway::{ContentStore, QuerySpec, ResultSet};
use crate::groq;

/// A product together with its owning variant documents, fetched in one
/// round trip.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,

    #[serde(rename = "variantDocs", default)]
    pub variants: Vec<Variant>,
}

/// Typed read access to the catalog documents.
///
/// This is the seam the aggregation callers depend on; pass an instance in
/// explicitly rather than reaching for shared process state.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Products matching a predicate.
    async fn products(&self, predicate: &Predicate) -> Result<Vec<Product>, StoreError>;

    /// Count of products matching a predicate, without fetching them.
    async fn count_products(&self, predicate: &Predicate) -> Result<u64, StoreError>;

    /// Every variant document.
    async fn variants(&self) -> Result<Vec<Variant>, StoreError>;

    /// Every category document.
    async fn categories(&self) -> Result<Vec<Category>, StoreError>;

    /// One product with its variants, or `None` if the id is unknown.
    async fn product_detail(&self, id: &DocumentId)
        -> Result<Option<ProductDetail>, StoreError>;
}

/// [`CatalogSource`] over any [`ContentStore`], via GROQ queries.
pub struct GroqCatalog<S> {
    store: S,
}

impl<S: ContentStore> GroqCatalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    async fn fetch_decoded<T: DeserializeOwned>(&self, spec: QuerySpec) -> Result<T, StoreError> {
        let result = self.store.fetch(&spec).await?;
        decode(result)
    }
}

fn decode<T: DeserializeOwned>(result: ResultSet) -> Result<T, StoreError> {
    serde_json::from_value(result).map_err(StoreError::malformed_result)
}

#[async_trait]
impl<S: ContentStore> CatalogSource for GroqCatalog<S> {
    async fn products(&self, predicate: &Predicate) -> Result<Vec<Product>, StoreError> {
        self.fetch_decoded(QuerySpec::new(groq::product_filter(predicate)))
            .await
    }

    async fn count_products(&self, predicate: &Predicate) -> Result<u64, StoreError> {
        self.fetch_decoded(QuerySpec::new(groq::product_count(predicate)))
            .await
    }

    async fn variants(&self) -> Result<Vec<Variant>, StoreError> {
        self.fetch_decoded(QuerySpec::new(groq::VARIANTS_QUERY)).await
    }

    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        self.fetch_decoded(QuerySpec::new(groq::CATEGORIES_QUERY))
            .await
    }

    async fn product_detail(
        &self,
        id: &DocumentId,
    ) -> Result<Option<ProductDetail>, StoreError> {
        let result = self.store.fetch(&groq::product_detail(id.as_str())).await?;
        if result.is_null() {
            return Ok(None);
        }
        decode(result).map(Some)
    }
}
