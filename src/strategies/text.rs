use super::{fragment, Strategy};
use crate::dom;
use crate::variant::Variant;
use crate::walk;
use scraper::ElementRef;

/// Elements owning a text node equal to `text` (after whitespace collapsing).
fn text_owners<'a>(scope: ElementRef<'a>, text: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    walk::text_nodes(scope)
        .filter(move |node| dom::normalize(node.value) == text)
        .filter_map(|node| node.parent)
}

/// Query by visible text. Only single-line text qualifies, and the text must sit
/// in a text node directly inside the element.
pub fn by_text(
    element: ElementRef<'_>,
    variant: Variant,
    scope: ElementRef<'_>,
    with_index: bool,
) -> Option<String> {
    let mut text = dom::inner_text(element);
    if text.is_empty() {
        text = dom::accessible_text(element);
    }
    if text.is_empty() || text.contains('\n') {
        return None;
    }

    if with_index {
        let index = walk::index_of(text_owners(scope, &text), element)?;
        return Some(fragment(variant, Strategy::Text, &text, None, Some(index)));
    }
    if walk::is_sole_match(text_owners(scope, &text), element) {
        return Some(fragment(variant, Strategy::Text, &text, None, None));
    }
    None
}
