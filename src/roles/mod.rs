//! Effective ARIA role of an element: the explicit `role` attribute, or the
//! implicit role HTML assigns to the tag (https://www.w3.org/TR/html-aria/#docconformance).

pub mod form;
pub mod table;

use crate::dom;
use scraper::ElementRef;

/// How the implicit role of a tag is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolver {
    /// The tag always maps to this role.
    Fixed(&'static str),
    /// `<a>` / `<area>`: `link` with an `href`, `generic` without.
    Hyperlink,
    /// `<img>`: `img` with a non-empty `alt`, `presentation` without.
    Image,
    /// `<input>`: depends on `type` and `list`.
    Input,
    /// `<select>`: depends on `multiple` and `size`.
    Select,
    /// `<td>` / `<th>`: depends on the role of the enclosing table.
    TableCell,
}

impl Resolver {
    /// Resolver for a lowercase tag name. Tags without an implicit role have none.
    pub fn for_tag(tag: &str) -> Option<Resolver> {
        use Resolver::*;

        let resolver = match tag {
            "a" | "area" => Hyperlink,
            "img" => Image,
            "input" => Input,
            "select" => Select,
            "td" | "th" => TableCell,

            "address" | "details" | "fieldset" | "hgroup" | "optgroup" => Fixed("group"),
            "article" => Fixed("article"),
            "aside" => Fixed("complementary"),
            "blockquote" => Fixed("blockquote"),
            "button" => Fixed("button"),
            "caption" => Fixed("caption"),
            "code" => Fixed("code"),
            "datalist" => Fixed("listbox"),
            "del" | "s" => Fixed("deletion"),
            "dfn" => Fixed("term"),
            "dialog" => Fixed("dialog"),
            "em" => Fixed("emphasis"),
            "figure" => Fixed("figure"),
            "form" => Fixed("form"),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Fixed("heading"),
            "hr" => Fixed("separator"),
            "html" => Fixed("document"),
            "ins" => Fixed("insertion"),
            "li" => Fixed("listitem"),
            "main" => Fixed("main"),
            "math" => Fixed("math"),
            "menu" | "ol" | "ul" => Fixed("list"),
            "meter" => Fixed("meter"),
            "nav" => Fixed("navigation"),
            "option" => Fixed("option"),
            "output" => Fixed("status"),
            "p" => Fixed("paragraph"),
            "progress" => Fixed("progressbar"),
            "search" => Fixed("search"),
            "section" => Fixed("region"),
            "strong" => Fixed("strong"),
            "sub" => Fixed("subscript"),
            "sup" => Fixed("superscript"),
            "table" => Fixed("table"),
            "tbody" | "tfoot" | "thead" => Fixed("rowgroup"),
            "textarea" => Fixed("textbox"),
            "time" => Fixed("time"),
            "tr" => Fixed("row"),

            "b" | "bdi" | "bdo" | "body" | "data" | "div" | "footer" | "header" | "i" | "pre"
            | "q" | "samp" | "small" | "span" | "u" => Fixed("generic"),

            _ => return None,
        };
        Some(resolver)
    }

    pub fn resolve(self, element: ElementRef<'_>) -> Option<&'static str> {
        match self {
            Resolver::Fixed(role) => Some(role),
            Resolver::Hyperlink => Some(if element.value().attr("href").is_some_and(|h| !h.is_empty()) {
                "link"
            } else {
                "generic"
            }),
            Resolver::Image => Some(if dom::non_empty_attr(element, "alt").is_some() {
                "img"
            } else {
                "presentation"
            }),
            Resolver::Input => form::input_role(element),
            Resolver::Select => Some(form::select_role(element)),
            Resolver::TableCell => table::cell_role(element),
        }
    }
}

/// Explicit `role` attribute if non-empty, else the implicit role of the tag.
pub fn role(element: ElementRef<'_>) -> Option<&str> {
    dom::non_empty_attr(element, "role").or_else(|| implicit_role(element))
}

pub fn implicit_role(element: ElementRef<'_>) -> Option<&'static str> {
    Resolver::for_tag(dom::tag(element))?.resolve(element)
}
