use super::{fragment, Strategy};
use crate::dom;
use crate::variant::Variant;
use crate::walk;
use scraper::ElementRef;

fn fields_with_value<'a>(scope: ElementRef<'a>, value: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    walk::elements_where(scope, move |el| {
        dom::is_form_field(el) && dom::display_value(el).as_deref() == Some(value)
    })
}

/// Query by the current value of an `input`, `textarea` or `select`.
pub fn by_display_value(
    element: ElementRef<'_>,
    variant: Variant,
    scope: ElementRef<'_>,
    with_index: bool,
) -> Option<String> {
    let value = dom::display_value(element).filter(|v| !v.is_empty())?;

    if with_index {
        let index = walk::index_of(fields_with_value(scope, &value), element)?;
        return Some(fragment(variant, Strategy::DisplayValue, &value, None, Some(index)));
    }
    if walk::is_sole_match(fields_with_value(scope, &value), element) {
        return Some(fragment(variant, Strategy::DisplayValue, &value, None, None));
    }
    None
}
