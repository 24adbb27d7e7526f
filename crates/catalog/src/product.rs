//! Product documents.

use serde::{Deserialize, Serialize};

use stocklens_core::{DocumentId, DomainError, DomainResult, Entity};

use crate::reference::{Image, Reference};

/// URL slug field (`{"_type": "slug", "current": "..."}` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    #[serde(rename = "_type", default = "slug_marker")]
    marker: String,
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            marker: slug_marker(),
            current: current.into(),
        }
    }
}

fn slug_marker() -> String {
    "slug".to_string()
}

/// A product document.
///
/// Variants are referenced documents (the current schema generation), never
/// embedded objects: `variants` holds ordered references and each variant
/// points back at its parent product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: DocumentId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,

    #[serde(default)]
    pub description: String,

    pub category: Reference,

    #[serde(rename = "isFeatured", default)]
    pub is_featured: bool,

    /// Average rating computed by the backend; read-only in the studio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(rename = "mainImage", default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<Image>,

    /// Ordered references to the product's variant documents.
    #[serde(default)]
    pub variants: Vec<Reference>,
}

impl Product {
    /// Check the invariants a product must satisfy once published.
    pub fn validate_published(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if self.variants.is_empty() {
            return Err(DomainError::invariant(
                "published product must reference at least one variant",
            ));
        }
        if let Some(rating) = self.rating {
            if !rating.is_finite() || rating < 0.0 {
                return Err(DomainError::validation("rating must be >= 0"));
            }
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = DocumentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
