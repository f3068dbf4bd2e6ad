use scraper::ElementRef;

/// A text node found under a scope, with the element that directly contains it.
#[derive(Debug, Clone, Copy)]
pub struct TextNode<'a> {
    pub value: &'a str,
    pub parent: Option<ElementRef<'a>>,
}

/// Descendant elements of `scope` in document order. The scope itself is excluded.
///
/// Every call starts a fresh traversal, so callers may walk the same scope repeatedly.
pub fn elements<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    scope.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Descendant elements of `scope` accepted by `filter`, in document order.
pub fn elements_where<'a, F>(scope: ElementRef<'a>, filter: F) -> impl Iterator<Item = ElementRef<'a>> + 'a
where
    F: Fn(ElementRef<'a>) -> bool + 'a,
{
    elements(scope).filter(move |el| filter(*el))
}

/// Descendant text nodes of `scope` in document order.
pub fn text_nodes<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = TextNode<'a>> + 'a {
    scope.descendants().skip(1).filter_map(|node| {
        let text = node.value().as_text()?;
        Some(TextNode {
            value: &**text,
            parent: node.parent().and_then(ElementRef::wrap),
        })
    })
}

/// True when `matches` yields exactly one element and that element is `target`.
/// Stops after the second match.
pub fn is_sole_match<'a>(
    mut matches: impl Iterator<Item = ElementRef<'a>>,
    target: ElementRef<'a>,
) -> bool {
    match (matches.next(), matches.next()) {
        (Some(only), None) => only.id() == target.id(),
        _ => false,
    }
}

/// 0-based position of `target` within `matches`.
pub fn index_of<'a>(
    mut matches: impl Iterator<Item = ElementRef<'a>>,
    target: ElementRef<'a>,
) -> Option<usize> {
    matches.position(|el| el.id() == target.id())
}
