use chrono::{DateTime, Utc};
use serde::Serialize;

use stocklens_aggregation::AggregateSnapshot;
use stocklens_catalog::{Product, Variant};
use stocklens_store::ProductDetail;

use crate::app::services::TimedSnapshot;

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub refreshed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub snapshot: AggregateSnapshot,
}

impl From<TimedSnapshot> for StatsResponse {
    fn from(timed: TimedSnapshot) -> Self {
        Self {
            refreshed_at: timed.refreshed_at,
            snapshot: timed.snapshot,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub is_featured: bool,
}

impl From<Product> for ProductItem {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            slug: product.slug.map(|s| s.current),
            is_featured: product.is_featured,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub filter: &'static str,
    pub total: u64,
    pub items: Vec<ProductItem>,
}

#[derive(Debug, Serialize)]
pub struct VariantItem {
    pub id: String,
    pub sku: String,
    pub price: f64,
    pub stock: u32,
}

impl From<Variant> for VariantItem {
    fn from(variant: Variant) -> Self {
        Self {
            id: variant.id.to_string(),
            sku: variant.sku,
            price: variant.price,
            stock: variant.stock,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    #[serde(flatten)]
    pub product: ProductItem,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub variants: Vec<VariantItem>,
}

impl From<ProductDetail> for ProductDetailResponse {
    fn from(detail: ProductDetail) -> Self {
        let description = detail.product.description.clone();
        let rating = detail.product.rating;
        Self {
            product: ProductItem::from(detail.product),
            description,
            rating,
            variants: detail.variants.into_iter().map(VariantItem::from).collect(),
        }
    }
}
