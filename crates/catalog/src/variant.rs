//! Variant documents.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use stocklens_core::{DocumentId, DomainError, DomainResult, Entity};

use crate::reference::{Image, Reference};

/// A product variant document (one sellable combination of color and size).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    #[serde(rename = "_id")]
    pub id: DocumentId,

    /// Parent product reference.
    pub product: Reference,

    /// Stock-keeping unit; unique per store.
    pub sku: String,

    pub color: Reference,
    pub size: Reference,

    pub price: f64,

    /// On-hand stock count. A document missing this field reads as 0; older
    /// snapshots omitted it and the aggregation must not fault on them.
    #[serde(default)]
    pub stock: u32,

    #[serde(default)]
    pub images: Vec<Image>,
}

impl Variant {
    pub fn validate(&self) -> DomainResult<()> {
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("variant sku cannot be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation("variant price must be >= 0"));
        }
        Ok(())
    }
}

impl Entity for Variant {
    type Id = DocumentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Enforce store-wide SKU uniqueness over a fetched variant set.
pub fn ensure_unique_skus(variants: &[Variant]) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for variant in variants {
        if !seen.insert(variant.sku.as_str()) {
            return Err(DomainError::invariant(format!(
                "duplicate sku: {}",
                variant.sku
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant_json(stock: Option<u32>) -> serde_json::Value {
        let mut json = serde_json::json!({
            "_id": "variant-1",
            "product": {"_type": "reference", "_ref": "prod-1"},
            "sku": "SKU-001",
            "color": {"_type": "reference", "_ref": "color-black"},
            "size": {"_type": "reference", "_ref": "size-m"},
            "price": 49.99
        });
        if let Some(stock) = stock {
            json["stock"] = serde_json::json!(stock);
        }
        json
    }

    #[test]
    fn decodes_store_document() {
        let v: Variant = serde_json::from_value(variant_json(Some(12))).unwrap();
        assert_eq!(v.stock, 12);
        assert_eq!(v.product.target.as_str(), "prod-1");
        assert!(v.validate().is_ok());
    }

    #[test]
    fn missing_stock_reads_as_zero() {
        let v: Variant = serde_json::from_value(variant_json(None)).unwrap();
        assert_eq!(v.stock, 0);
    }

    #[test]
    fn rejects_blank_sku_and_negative_price() {
        let mut v: Variant = serde_json::from_value(variant_json(Some(1))).unwrap();
        v.sku = "  ".to_string();
        assert!(v.validate().is_err());

        let mut v: Variant = serde_json::from_value(variant_json(Some(1))).unwrap();
        v.price = -1.0;
        assert!(v.validate().is_err());
    }

    #[test]
    fn duplicate_skus_are_rejected() {
        let a: Variant = serde_json::from_value(variant_json(Some(1))).unwrap();
        let mut b = a.clone();
        b.id = DocumentId::new("variant-2").unwrap();
        assert!(ensure_unique_skus(std::slice::from_ref(&a)).is_ok());
        assert!(ensure_unique_skus(&[a, b]).is_err());
    }
}
