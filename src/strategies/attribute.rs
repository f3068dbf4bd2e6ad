use super::{fragment, Strategy};
use crate::dom;
use crate::variant::Variant;
use crate::walk;
use scraper::ElementRef;

/// Query by exact attribute value, the equivalent of counting `[attr="value"]` matches.
fn by_attribute(
    attr: &'static str,
    strategy: Strategy,
    element: ElementRef<'_>,
    variant: Variant,
    scope: ElementRef<'_>,
    with_index: bool,
) -> Option<String> {
    let value = dom::non_empty_attr(element, attr)?;
    let matches = walk::elements_where(scope, move |el| el.value().attr(attr) == Some(value));

    if with_index {
        let index = walk::index_of(matches, element)?;
        return Some(fragment(variant, strategy, value, None, Some(index)));
    }
    if walk::is_sole_match(matches, element) {
        return Some(fragment(variant, strategy, value, None, None));
    }
    None
}

/// Placeholders are a poor substitute for labels, but better than nothing.
pub fn by_placeholder_text(
    element: ElementRef<'_>,
    variant: Variant,
    scope: ElementRef<'_>,
    with_index: bool,
) -> Option<String> {
    by_attribute("placeholder", Strategy::PlaceholderText, element, variant, scope, with_index)
}

pub fn by_alt_text(
    element: ElementRef<'_>,
    variant: Variant,
    scope: ElementRef<'_>,
    with_index: bool,
) -> Option<String> {
    by_attribute("alt", Strategy::AltText, element, variant, scope, with_index)
}

pub fn by_title(
    element: ElementRef<'_>,
    variant: Variant,
    scope: ElementRef<'_>,
    with_index: bool,
) -> Option<String> {
    by_attribute("title", Strategy::Title, element, variant, scope, with_index)
}

/// Last resort: users never see `data-testid`.
pub fn by_test_id(
    element: ElementRef<'_>,
    variant: Variant,
    scope: ElementRef<'_>,
    with_index: bool,
) -> Option<String> {
    by_attribute("data-testid", Strategy::TestId, element, variant, scope, with_index)
}
