//! Typed references between documents.
//!
//! The store models relationships as references (a typed pointer by id,
//! resolved at query time), not embedding. On the wire a reference is
//! `{"_type": "reference", "_ref": "<id>"}`, optionally carrying a `_key`
//! when it lives inside an array field.

use serde::{Deserialize, Serialize};

use stocklens_core::DocumentId;

/// A pointer from one document to another by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "_type", default = "reference_marker")]
    marker: String,

    /// Id of the referenced document.
    #[serde(rename = "_ref")]
    pub target: DocumentId,

    /// Array-item key; only present when the reference sits in an array field.
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Reference {
    pub fn to(target: DocumentId) -> Self {
        Self {
            marker: reference_marker(),
            target,
            key: None,
        }
    }

    /// Reference with an array-item key (for refs stored in array fields,
    /// e.g. a product's variant list).
    pub fn keyed(target: DocumentId, key: impl Into<String>) -> Self {
        Self {
            marker: reference_marker(),
            target,
            key: Some(key.into()),
        }
    }
}

fn reference_marker() -> String {
    "reference".to_string()
}

/// An image field: a reference to an uploaded asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(rename = "_type", default = "image_marker")]
    marker: String,

    pub asset: Reference,

    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

fn image_marker() -> String {
    "image".to_string()
}
