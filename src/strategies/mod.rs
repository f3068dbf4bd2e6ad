//! Query strategies. Each one tries to build a query call that singles out an
//! element inside a scope; the composer tries them in priority order.

pub mod attribute;
pub mod display_value;
pub mod label;
pub mod role;
pub mod text;

use crate::variant::Variant;
use scraper::ElementRef;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Role,
    LabelText,
    PlaceholderText,
    Text,
    DisplayValue,
    AltText,
    Title,
    TestId,
}

impl Strategy {
    /// Priority order: the first strategy producing a query wins.
    pub const ORDER: [Strategy; 8] = [
        Strategy::Role,
        Strategy::LabelText,
        Strategy::PlaceholderText,
        Strategy::Text,
        Strategy::DisplayValue,
        Strategy::AltText,
        Strategy::Title,
        Strategy::TestId,
    ];

    /// Suffix of the query function name, e.g. `LabelText` in `getByLabelText`.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Role => "Role",
            Strategy::LabelText => "LabelText",
            Strategy::PlaceholderText => "PlaceholderText",
            Strategy::Text => "Text",
            Strategy::DisplayValue => "DisplayValue",
            Strategy::AltText => "AltText",
            Strategy::Title => "Title",
            Strategy::TestId => "TestId",
        }
    }

    /// Run this strategy for `element` within `scope`.
    ///
    /// Without `with_index` a query is only produced when it matches `element` alone.
    /// With `with_index` the query carries the element's position among all matches.
    pub fn evaluate(
        self,
        element: ElementRef<'_>,
        variant: Variant,
        scope: ElementRef<'_>,
        with_index: bool,
    ) -> Option<String> {
        match self {
            Strategy::Role => role::by_role(element, variant, scope, with_index),
            Strategy::LabelText => label::by_label_text(element, variant, scope, with_index),
            Strategy::PlaceholderText => attribute::by_placeholder_text(element, variant, scope, with_index),
            Strategy::Text => text::by_text(element, variant, scope, with_index),
            Strategy::DisplayValue => display_value::by_display_value(element, variant, scope, with_index),
            Strategy::AltText => attribute::by_alt_text(element, variant, scope, with_index),
            Strategy::Title => attribute::by_title(element, variant, scope, with_index),
            Strategy::TestId => attribute::by_test_id(element, variant, scope, with_index),
        }
    }
}

/// Render one query call: `getByRole('button', {name: 'Save'})[2]`.
pub fn fragment(
    variant: Variant,
    strategy: Strategy,
    key: &str,
    name: Option<&str>,
    index: Option<usize>,
) -> String {
    let mut out = format!("{}{}('{}'", variant, strategy.as_str(), key);
    if let Some(name) = name {
        out.push_str(&format!(", {{name: '{}'}}", name));
    }
    out.push(')');
    if let Some(index) = index {
        out.push_str(&format!("[{}]", index));
    }
    out
}

/// Try every strategy in priority order and return the first query produced.
pub fn compose_query(
    scope: ElementRef<'_>,
    element: ElementRef<'_>,
    variant: Variant,
    with_index: bool,
) -> Option<String> {
    Strategy::ORDER.into_iter().find_map(|strategy| {
        let query = strategy.evaluate(element, variant, scope, with_index)?;
        trace!(strategy = strategy.as_str(), query = %query, "strategy matched");
        Some(query)
    })
}
