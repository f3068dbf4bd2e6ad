//! Element helpers over a parsed document: text extraction, labels, form values.

use crate::walk;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// Tags whose boxes start on a new line when rendered.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "caption", "dd", "details", "dialog", "div",
    "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4",
    "h5", "h6", "header", "hgroup", "hr", "legend", "li", "main", "menu", "nav", "ol", "p",
    "pre", "section", "summary", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

/// Tags whose content is never rendered as text.
const UNRENDERED_TAGS: &[&str] = &["head", "noscript", "script", "style", "template", "title"];

/// Elements a `<label>` can be associated with.
const LABELABLE_TAGS: &[&str] = &["button", "input", "meter", "output", "progress", "select", "textarea"];

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Collapse runs of whitespace to a single space and trim both ends.
pub fn normalize(text: &str) -> String {
    whitespace().replace_all(text, " ").trim().to_string()
}

pub fn same(a: ElementRef<'_>, b: ElementRef<'_>) -> bool {
    a.id() == b.id()
}

pub fn tag(element: ElementRef<'_>) -> &str {
    element.value().name()
}

/// Attribute value, treating an empty value as absent.
pub fn non_empty_attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name).filter(|v| !v.is_empty())
}

/// The `<body>` of a document. html5ever always synthesises one for HTML input.
pub fn body(document: &Html) -> Option<ElementRef<'_>> {
    document
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| tag(*el) == "body")
}

pub fn parent(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.parent().and_then(ElementRef::wrap)
}

/// Ancestor elements, nearest first. The element itself is excluded.
pub fn ancestors<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element.ancestors().filter_map(ElementRef::wrap)
}

/// The element itself or its nearest ancestor matching `selector`.
pub fn closest<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    std::iter::once(element)
        .chain(ancestors(element))
        .find(|el| selector.matches(el))
}

/// Concatenation of every descendant text node, as `textContent` reports it.
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// `textContent` with whitespace collapsed. Used as the accessible name of an element.
pub fn accessible_text(element: ElementRef<'_>) -> String {
    normalize(&text_content(element))
}

/// Approximation of the rendered `innerText`: block boxes and `<br>` break lines,
/// unrendered subtrees are dropped and whitespace inside a line collapses.
pub fn inner_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_rendered(element, &mut raw);
    raw.split('\n')
        .map(normalize)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_rendered(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            let name = tag(child_el);
            if UNRENDERED_TAGS.contains(&name) {
                continue;
            }
            if name == "br" {
                out.push('\n');
                continue;
            }
            let block = BLOCK_TAGS.contains(&name);
            if block {
                out.push('\n');
            }
            collect_rendered(child_el, out);
            if block {
                out.push('\n');
            }
        } else if let Some(text) = child.value().as_text() {
            // Source line breaks are formatting, not rendered breaks
            out.push_str(&text.replace('\n', " "));
        }
    }
}

fn is_labelable(element: ElementRef<'_>) -> bool {
    let name = tag(element);
    if name == "input" {
        return !element
            .value()
            .attr("type")
            .is_some_and(|t| t.eq_ignore_ascii_case("hidden"));
    }
    LABELABLE_TAGS.contains(&name)
}

fn document_root(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    std::iter::once(element).chain(ancestors(element)).last()
}

/// The control a `<label>` is associated with: its `for` target, or else its
/// first labelable descendant.
pub fn labeled_control(label: ElementRef<'_>) -> Option<ElementRef<'_>> {
    match label.value().attr("for") {
        Some(for_id) => {
            let root = document_root(label)?;
            walk::elements(root)
                .find(|el| el.value().attr("id") == Some(for_id))
                .filter(|el| is_labelable(*el))
        }
        None => walk::elements(label).find(|el| is_labelable(*el)),
    }
}

/// `<label>` elements associated with `element`, in document order.
/// Only elements carrying an `id` are considered labelled.
pub fn labels(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    if non_empty_attr(element, "id").is_none() || !is_labelable(element) {
        return Vec::new();
    }
    let Some(root) = document_root(element) else {
        return Vec::new();
    };
    walk::elements_where(root, |el| tag(el) == "label")
        .filter(|label| labeled_control(*label).is_some_and(|c| same(c, element)))
        .collect()
}

pub fn is_form_field(element: ElementRef<'_>) -> bool {
    matches!(tag(element), "input" | "textarea" | "select")
}

/// Current value of a form field as a browser would report it on load.
/// Non form fields have no display value.
pub fn display_value(element: ElementRef<'_>) -> Option<String> {
    match tag(element) {
        "input" => {
            let value = element.value().attr("value");
            let checkable = element
                .value()
                .attr("type")
                .is_some_and(|t| t.eq_ignore_ascii_case("checkbox") || t.eq_ignore_ascii_case("radio"));
            match value {
                Some(v) => Some(v.to_string()),
                None if checkable => Some("on".to_string()),
                None => Some(String::new()),
            }
        }
        "textarea" => Some(text_content(element)),
        "select" => Some(select_value(element)),
        _ => None,
    }
}

fn select_value(select: ElementRef<'_>) -> String {
    let options: Vec<ElementRef<'_>> = walk::elements_where(select, |el| tag(el) == "option").collect();
    let selected = options
        .iter()
        .find(|opt| opt.value().attr("selected").is_some())
        .or_else(|| {
            if select.value().attr("multiple").is_some() {
                None
            } else {
                options.first()
            }
        });
    match selected {
        Some(opt) => match opt.value().attr("value") {
            Some(v) => v.to_string(),
            None => accessible_text(*opt),
        },
        None => String::new(),
    }
}

/// Short human-readable description, e.g. `button#save.primary`.
pub fn describe(element: ElementRef<'_>) -> String {
    let mut out = tag(element).to_string();
    if let Some(id) = non_empty_attr(element, "id") {
        out.push('#');
        out.push_str(id);
    }
    for class in element.value().classes() {
        out.push('.');
        out.push_str(class);
    }
    out
}
