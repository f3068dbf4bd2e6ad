//! Visual debugging of a search. The search reports every element it inspects
//! together with the reason; what a highlighter does with that is up to the host.

use crate::dom;
use scraper::ElementRef;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    /// The clicked element.
    Target,
    /// The ancestor chosen as scope root.
    UniqueAncestor,
    /// An ancestor without a document-wide unique query.
    NonUniqueAncestor,
    /// An intermediate ancestor addressed by role and sibling index.
    Pinned,
}

impl Highlight {
    /// Inline style appended to the element when highlighting it in a page.
    pub fn css(self) -> &'static str {
        match self {
            Highlight::Target => "color:yellow; background-color:green;",
            Highlight::UniqueAncestor => "color:aqua; background-color:blue;",
            Highlight::NonUniqueAncestor => "color:orange; background-color:red;",
            Highlight::Pinned => "color:aquamarine; background-color:green;",
        }
    }
}

pub trait Highlighter {
    fn highlight(&mut self, element: ElementRef<'_>, kind: Highlight);
}

impl<F> Highlighter for F
where
    F: FnMut(ElementRef<'_>, Highlight),
{
    fn highlight(&mut self, element: ElementRef<'_>, kind: Highlight) {
        self(element, kind)
    }
}

/// Ignores every highlight.
pub struct NoHighlight;

impl Highlighter for NoHighlight {
    fn highlight(&mut self, _element: ElementRef<'_>, _kind: Highlight) {}
}

#[derive(Debug, Clone, Serialize)]
pub struct HighlightEntry {
    pub element: String,
    pub kind: Highlight,
    pub style: &'static str,
}

/// Records highlights in visiting order, logging each one.
#[derive(Debug, Default)]
pub struct HighlightLog {
    pub entries: Vec<HighlightEntry>,
}

impl Highlighter for HighlightLog {
    fn highlight(&mut self, element: ElementRef<'_>, kind: Highlight) {
        let described = dom::describe(element);
        debug!(element = %described, ?kind, "highlight");
        self.entries.push(HighlightEntry {
            element: described,
            kind,
            style: kind.css(),
        });
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    #[test]
    fn log_records_in_order() {
        let document = parser::parse(r#"<ul id="list"><li>a</li></ul>"#);
        let li = parser::find_target(&document, "li", 0).unwrap();
        let ul = parser::find_target(&document, "ul", 0).unwrap();
        let mut log = HighlightLog::default();
        log.highlight(li, Highlight::Target);
        log.highlight(ul, Highlight::UniqueAncestor);
        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[0].element, "li");
        assert_eq!(log.entries[1].element, "ul#list");
        assert_eq!(log.entries[1].style, "color:aqua; background-color:blue;");
    }

    #[test]
    fn closures_are_highlighters() {
        let document = parser::parse("<p>x</p>");
        let p = parser::find_target(&document, "p", 0).unwrap();
        let mut seen = Vec::new();
        let mut record = |_el: ElementRef<'_>, kind: Highlight| seen.push(kind);
        record.highlight(p, Highlight::Pinned);
        assert_eq!(seen, vec![Highlight::Pinned]);
    }
}
