//! Scope search: find a query chain that resolves to exactly one element,
//! scoping through ancestors with `within(...)` when the element alone is ambiguous.

use crate::dom;
use crate::highlight::{Highlight, Highlighter};
use crate::roles;
use crate::strategies::compose_query;
use crate::variant::Variant;
use scraper::{ElementRef, Html};
use tracing::debug;

/// The nearest ancestor with a document-wide unique query.
pub struct UniqueParent<'a> {
    pub parent: ElementRef<'a>,
    /// `within( screen.<query> )`
    pub within: String,
    /// Ancestors between `parent` and the element, outermost first.
    pub stack: Vec<ElementRef<'a>>,
}

/// Walk up from the element's parent until an ancestor is uniquely queryable in the
/// whole document. Returns `None` when no ancestor up to the root qualifies.
pub fn unique_parent<'a>(
    body: ElementRef<'a>,
    element: ElementRef<'a>,
    variant: Variant,
    debug: bool,
    highlighter: &mut dyn Highlighter,
) -> Option<UniqueParent<'a>> {
    let mut stack = Vec::new();
    for parent in dom::ancestors(element) {
        if let Some(query) = compose_query(body, parent, variant, false) {
            debug!(ancestor = %dom::describe(parent), query = %query, "unique ancestor");
            if debug {
                highlighter.highlight(parent, Highlight::UniqueAncestor);
            }
            return Some(UniqueParent {
                parent,
                within: format!("within( screen.{} )", query),
                stack,
            });
        }

        stack.insert(0, parent);
        if debug {
            highlighter.highlight(parent, Highlight::NonUniqueAncestor);
        }
    }
    debug!(element = %dom::describe(element), "no unique ancestor");
    None
}

/// Nest each selector inside the previous scope: `within( <scope>\n.<selector> )`.
pub fn within_encapsulation(within: &str, selectors: &[String]) -> String {
    selectors.iter().fold(within.to_string(), |scope, selector| {
        format!("within( {}\n.{} )", scope, selector)
    })
}

/// `getAllByRole('<role>')[i]` where `i` is the element's position among
/// same-role siblings under its direct parent.
fn sibling_role_query(element: ElementRef<'_>) -> Option<String> {
    let role = roles::role(element).filter(|r| *r != "generic")?;
    let parent = dom::parent(element)?;
    let index = parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|sibling| roles::role(*sibling) == Some(role))
        .position(|sibling| dom::same(sibling, element))?;
    Some(format!("getAllByRole('{}')[{}]", role, index))
}

/// Suggest a query for `element`.
///
/// The caller's `variant` shapes the document-wide queries; the final query inside a
/// scope is always `getBy`, or an indexed `getAllBy` as a last resort. When even that
/// fails, the scope path alone is returned. `debug` turns on highlighting.
pub fn find_suggested_query(
    document: &Html,
    element: ElementRef<'_>,
    variant: Variant,
    debug: bool,
    highlighter: &mut dyn Highlighter,
) -> Option<String> {
    let body = dom::body(document)?;

    if let Some(query) = compose_query(body, element, variant, false) {
        return Some(format!("screen.{}", query));
    }

    let UniqueParent { parent, within, stack } =
        unique_parent(body, element, variant, debug, highlighter)?;

    if let Some(query) = compose_query(parent, element, Variant::GetBy, false) {
        return Some(format!("{}\n.{}", within, query));
    }

    // Ancestors that are ambiguous relative to the previous one get pinned by role
    let mut pinned = parent;
    let mut previous = parent;
    let mut middle = Vec::new();
    for ancestor in stack {
        let resolved = compose_query(previous, ancestor, variant, false);
        previous = ancestor;
        if resolved.is_some() {
            continue;
        }
        let Some(query) = sibling_role_query(ancestor) else {
            continue;
        };
        if debug {
            highlighter.highlight(ancestor, Highlight::Pinned);
        }
        debug!(ancestor = %dom::describe(ancestor), query = %query, "pinned ancestor");
        middle.push(query);
        pinned = ancestor;
    }

    let path = within_encapsulation(&within, &middle);

    if let Some(query) = compose_query(pinned, element, Variant::GetBy, false) {
        return Some(format!("{}\n.{}", path, query));
    }
    match compose_query(pinned, element, Variant::GetAllBy, true) {
        Some(query) => Some(format!("{}\n.{}", path, query)),
        None => Some(path),
    }
}
