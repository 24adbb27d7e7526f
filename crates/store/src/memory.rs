//! In-memory catalog source.
//!
//! Intended for tests/dev. Applies predicates locally with the same
//! semantics the GROQ filters have remotely.

use std::sync::RwLock;

use async_trait::async_trait;

use stocklens_aggregation::Predicate;
use stocklens_catalog::{Category, Product, Variant};
use stocklens_core::DocumentId;

use crate::error::StoreError;
use crate::source::{CatalogSource, ProductDetail};

#[derive(Debug, Default)]
struct Documents {
    products: Vec<Product>,
    variants: Vec<Variant>,
    categories: Vec<Category>,
}

/// [`CatalogSource`] backed by plain vectors.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    documents: RwLock<Documents>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(
        products: Vec<Product>,
        variants: Vec<Variant>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            documents: RwLock::new(Documents {
                products,
                variants,
                categories,
            }),
        }
    }

    pub fn insert_product(&self, product: Product) {
        if let Ok(mut docs) = self.documents.write() {
            docs.products.push(product);
        }
    }

    pub fn insert_variant(&self, variant: Variant) {
        if let Ok(mut docs) = self.documents.write() {
            docs.variants.push(variant);
        }
    }

    pub fn insert_category(&self, category: Category) {
        if let Ok(mut docs) = self.documents.write() {
            docs.categories.push(category);
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Documents>, StoreError> {
        self.documents
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

fn product_matches(predicate: &Predicate, product: &Product, variants: &[Variant]) -> bool {
    let stocks = variants
        .iter()
        .filter(|v| v.product.target == product.id)
        .map(|v| v.stock);
    predicate.matches(stocks)
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn products(&self, predicate: &Predicate) -> Result<Vec<Product>, StoreError> {
        let docs = self.read()?;
        Ok(docs
            .products
            .iter()
            .filter(|p| product_matches(predicate, p, &docs.variants))
            .cloned()
            .collect())
    }

    async fn count_products(&self, predicate: &Predicate) -> Result<u64, StoreError> {
        let docs = self.read()?;
        Ok(docs
            .products
            .iter()
            .filter(|p| product_matches(predicate, p, &docs.variants))
            .count() as u64)
    }

    async fn variants(&self) -> Result<Vec<Variant>, StoreError> {
        Ok(self.read()?.variants.clone())
    }

    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.read()?.categories.clone())
    }

    async fn product_detail(
        &self,
        id: &DocumentId,
    ) -> Result<Option<ProductDetail>, StoreError> {
        let docs = self.read()?;
        let Some(product) = docs.products.iter().find(|p| &p.id == id) else {
            return Ok(None);
        };
        let variants = docs
            .variants
            .iter()
            .filter(|v| &v.product.target == id)
            .cloned()
            .collect();
        Ok(Some(ProductDetail {
            product: product.clone(),
            variants,
        }))
    }
}
