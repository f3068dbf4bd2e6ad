pub mod plain;
pub mod json;

use crate::highlight::HighlightEntry;
use crate::variant::Variant;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Outcome of one search for one variant.
#[derive(Debug, Clone, Serialize)]
pub struct VariantResult {
    pub variant: Variant,
    pub suggestion: Option<String>,
    /// Elements inspected while searching. Only filled in debug mode.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<HighlightEntry>,
}

/// All searches run for one clicked element.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Description of the element the click resolved to.
    pub target: String,
    pub results: Vec<VariantResult>,
}
