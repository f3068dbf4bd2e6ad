use super::{fragment, Strategy};
use crate::dom;
use crate::variant::Variant;
use crate::walk;
use scraper::ElementRef;

fn labels_with_text<'a>(scope: ElementRef<'a>, text: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    walk::elements_where(scope, move |el| dom::tag(el) == "label" && dom::accessible_text(el) == text)
}

/// Query by the text of an associated `<label>`. Only elements with an `id` qualify.
///
/// When the element has several labels, the first one whose text is unique in scope wins.
pub fn by_label_text(
    element: ElementRef<'_>,
    variant: Variant,
    scope: ElementRef<'_>,
    with_index: bool,
) -> Option<String> {
    dom::non_empty_attr(element, "id")?;
    let labels = dom::labels(element);
    if labels.is_empty() {
        return None;
    }
    let texts: Vec<String> = labels.iter().map(|label| dom::accessible_text(*label)).collect();

    if with_index {
        // Controls labelled by same-text labels, in label order
        return texts.iter().filter(|t| !t.is_empty()).find_map(|text| {
            let controls = labels_with_text(scope, text).filter_map(dom::labeled_control);
            let index = walk::index_of(controls, element)?;
            Some(fragment(variant, Strategy::LabelText, text, None, Some(index)))
        });
    }

    let text = texts.iter().filter(|t| !t.is_empty()).find(|text| {
        let mut matches = labels_with_text(scope, text);
        match (matches.next(), matches.next()) {
            (Some(only), None) => labels.iter().any(|label| dom::same(*label, only)),
            _ => false,
        }
    })?;
    Some(fragment(variant, Strategy::LabelText, text, None, None))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn run(html: &str, css: &str, nth: usize, with_index: bool) -> Option<String> {
        let document = parser::parse(html);
        let body = dom::body(&document).unwrap();
        let element = parser::find_target(&document, css, nth).unwrap();
        by_label_text(element, Variant::GetBy, body, with_index)
    }

    #[test]
    fn unique_label() {
        let html = r#"<label for="email">Email</label><input id="email">"#;
        assert_eq!(run(html, "input", 0, false).unwrap(), "getByLabelText('Email')");
    }

    #[test]
    fn wrapping_label() {
        let html = r#"<label>Age <input id="age" type="number"></label>"#;
        assert_eq!(run(html, "input", 0, false).unwrap(), "getByLabelText('Age')");
    }

    #[test]
    fn no_id_no_query() {
        let html = r#"<label>Age <input type="number"></label>"#;
        assert!(run(html, "input", 0, false).is_none());
    }

    #[test]
    fn duplicate_label_text_is_not_unique() {
        let html = r#"<label for="a">Name</label><input id="a"><label for="b">Name</label><input id="b">"#;
        assert!(run(html, "input", 1, false).is_none());
    }

    #[test]
    fn duplicate_label_text_with_index() {
        let html = r#"<label for="a">Name</label><input id="a"><label for="b">Name</label><input id="b">"#;
        assert_eq!(run(html, "input", 1, true).unwrap(), "getByLabelText('Name')[1]");
    }

    #[test]
    fn second_label_used_when_first_is_shared() {
        let html = concat!(
            r#"<label for="a">Name</label><input id="a">"#,
            r#"<label for="b">Name</label><label for="b">Billing name</label><input id="b">"#,
        );
        assert_eq!(run(html, "input", 1, false).unwrap(), "getByLabelText('Billing name')");
    }
}
