//! Color documents.
//!
//! The normalized shape carries a single hex string. Earlier snapshots stored
//! `hex` as a 1-3 element array; that generation is migrated (not decoded) —
//! see the `migrate-colors` command in seedctl.

use serde::{Deserialize, Serialize};

use stocklens_core::{DocumentId, DomainError, DomainResult, Entity};

/// A color option document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    #[serde(rename = "_id")]
    pub id: DocumentId,

    pub name: String,

    /// Single hex code, e.g. `#000000`.
    pub hex: String,
}

impl Color {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("color name is required"));
        }
        let hex = self.hex.trim();
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !(digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())) {
            return Err(DomainError::validation(format!(
                "invalid hex code: {}",
                self.hex
            )));
        }
        Ok(())
    }
}

impl Entity for Color {
    type Id = DocumentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(hex: &str) -> Color {
        Color {
            id: DocumentId::new("color-black").unwrap(),
            name: "Black".to_string(),
            hex: hex.to_string(),
        }
    }

    #[test]
    fn accepts_six_digit_hex() {
        assert!(color("#000000").validate().is_ok());
        assert!(color("FFD700").validate().is_ok());
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(color("#00").validate().is_err());
        assert!(color("not-a-color").validate().is_err());
    }
}
