//! Category documents.

use serde::{Deserialize, Serialize};

use stocklens_core::{DocumentId, DomainError, DomainResult, Entity};

use crate::reference::Image;

/// A product category document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: DocumentId,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

impl Category {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("category name is required"));
        }
        Ok(())
    }
}

impl Entity for Category {
    type Id = DocumentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_required() {
        let c: Category = serde_json::from_value(serde_json::json!({
            "_id": "cat-shoes",
            "name": ""
        }))
        .unwrap();
        assert!(c.validate().is_err());
    }
}
