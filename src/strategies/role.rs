use super::{fragment, Strategy};
use crate::dom;
use crate::roles;
use crate::variant::Variant;
use crate::walk;
use scraper::ElementRef;

/// Elements under `scope` with `role` and, when given, the accessible name `name`.
fn role_matches<'a>(
    scope: ElementRef<'a>,
    role: &'a str,
    name: Option<&'a str>,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    walk::elements_where(scope, move |el| {
        roles::role(el) == Some(role) && name.map_or(true, |n| dom::accessible_text(el) == n)
    })
}

/// Query by ARIA role, qualified by the accessible name when the element has text.
///
/// Table rows are rarely unique by name, so a `row` is always addressed by its
/// position among every row in scope, using the multi-match form of the variant.
pub fn by_role(
    element: ElementRef<'_>,
    variant: Variant,
    scope: ElementRef<'_>,
    with_index: bool,
) -> Option<String> {
    let role = roles::role(element)?;
    if role == "generic" {
        return None;
    }

    let name = dom::accessible_text(element);
    let name_arg = (!name.is_empty()).then_some(name.as_str());

    if with_index {
        let index = walk::index_of(role_matches(scope, role, name_arg), element)?;
        return Some(fragment(variant, Strategy::Role, role, name_arg, Some(index)));
    }

    if role == "row" {
        if let Some(index) = walk::index_of(role_matches(scope, role, None), element) {
            return Some(fragment(variant.to_all(), Strategy::Role, role, None, Some(index)));
        }
    }

    if walk::is_sole_match(role_matches(scope, role, name_arg), element) {
        return Some(fragment(variant, Strategy::Role, role, name_arg, None));
    }
    None
}
