//! Aggregation engine: reduce fetched documents to an [`AggregateSnapshot`].

use std::collections::HashMap;

use stocklens_catalog::{Category, Product, Variant};

use crate::snapshot::{AggregateSnapshot, CategoryCount, ProductStockSummary};
use crate::thresholds;

/// How many products the ranked low-stock list keeps.
pub const RANKED_LIST_LIMIT: usize = 5;

/// Reduce one request's fetched documents into summary statistics.
///
/// Pure: same inputs, same output; no IO, no hidden state. Empty inputs yield
/// a zeroed snapshot rather than an error.
///
/// Variants are matched to products through their parent-product reference.
/// A product with no variants counts as total stock 0. The ranked list is
/// sorted ascending by summed stock with ties broken by the products' input
/// order (stable sort).
pub fn summarize(
    products: &[Product],
    variants: &[Variant],
    categories: &[Category],
) -> AggregateSnapshot {
    let total_products = products.len() as u64;
    let total_variants = variants.len() as u64;

    let low_stock_variant_count = variants
        .iter()
        .filter(|v| v.stock < thresholds::LOW_STOCK)
        .count() as u64;
    let out_of_stock_count = variants
        .iter()
        .filter(|v| v.stock == thresholds::OUT_OF_STOCK)
        .count() as u64;

    let mut stock_by_product: HashMap<&str, u64> = HashMap::new();
    for variant in variants {
        *stock_by_product
            .entry(variant.product.target.as_str())
            .or_default() += u64::from(variant.stock);
    }

    let category_counts = categories
        .iter()
        .map(|category| CategoryCount {
            category_id: category.id.clone(),
            name: category.name.clone(),
            product_count: products
                .iter()
                .filter(|p| p.category.target == category.id)
                .count() as u64,
        })
        .collect();

    let mut ranked: Vec<ProductStockSummary> = products
        .iter()
        .map(|product| ProductStockSummary {
            product_id: product.id.clone(),
            name: product.name.clone(),
            total_stock: stock_by_product
                .get(product.id.as_str())
                .copied()
                .unwrap_or(0),
        })
        .collect();
    ranked.sort_by_key(|entry| entry.total_stock);
    ranked.truncate(RANKED_LIST_LIMIT);

    AggregateSnapshot {
        total_products,
        total_variants,
        low_stock_variant_count,
        out_of_stock_count,
        categories: category_counts,
        lowest_stock_products: ranked,
    }
}
