//! Size documents.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stocklens_core::{DocumentId, DomainError, Entity};

/// Enumerated size short codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeCode {
    S,
    M,
    L,
    XL,
}

impl SizeCode {
    pub const ALL: [SizeCode; 4] = [SizeCode::S, SizeCode::M, SizeCode::L, SizeCode::XL];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCode::S => "S",
            SizeCode::M => "M",
            SizeCode::L => "L",
            SizeCode::XL => "XL",
        }
    }
}

impl core::fmt::Display for SizeCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(SizeCode::S),
            "M" => Ok(SizeCode::M),
            "L" => Ok(SizeCode::L),
            "XL" => Ok(SizeCode::XL),
            other => Err(DomainError::validation(format!(
                "unknown size code: {other}"
            ))),
        }
    }
}

/// A size option document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    #[serde(rename = "_id")]
    pub id: DocumentId,

    pub name: SizeCode,
}

impl Entity for Size {
    type Id = DocumentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
