use crate::error::WhichQueryError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Query kind prefix placed in front of every generated query call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Variant {
    #[serde(rename = "getBy")]
    GetBy,
    #[serde(rename = "queryBy")]
    QueryBy,
    #[serde(rename = "findBy")]
    FindBy,
    #[serde(rename = "getAllBy")]
    GetAllBy,
    #[serde(rename = "queryAllBy")]
    QueryAllBy,
    #[serde(rename = "findAllBy")]
    FindAllBy,
}

impl Variant {
    /// Context menu order: single-match kinds, then multi-match kinds.
    pub const ALL: [Variant; 6] = [
        Variant::GetBy,
        Variant::QueryBy,
        Variant::FindBy,
        Variant::GetAllBy,
        Variant::QueryAllBy,
        Variant::FindAllBy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::GetBy => "getBy",
            Variant::QueryBy => "queryBy",
            Variant::FindBy => "findBy",
            Variant::GetAllBy => "getAllBy",
            Variant::QueryAllBy => "queryAllBy",
            Variant::FindAllBy => "findAllBy",
        }
    }

    /// The multi-match counterpart (`getBy` -> `getAllBy`). Multi-match kinds map to themselves.
    pub fn to_all(self) -> Variant {
        match self {
            Variant::GetBy => Variant::GetAllBy,
            Variant::QueryBy => Variant::QueryAllBy,
            Variant::FindBy => Variant::FindAllBy,
            multi => multi,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = WhichQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == s.trim())
            .ok_or_else(|| WhichQueryError::InvalidVariant(s.to_string()))
    }
}
