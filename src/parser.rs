use crate::error::WhichQueryError;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Parse an HTML source into a document tree.
/// html5ever is error-tolerant, so recoverable parse errors are only logged.
pub fn parse(source: &str) -> Html {
    let document = Html::parse_document(source);
    if !document.errors.is_empty() {
        debug!(errors = document.errors.len(), "html parsed with recoverable errors");
    }
    document
}

/// Compile a CSS selector, mapping selector errors to `InvalidSelector`.
pub fn selector(css: &str) -> Result<Selector, WhichQueryError> {
    Selector::parse(css).map_err(|e| WhichQueryError::InvalidSelector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Find the `nth` (0-based) element matching `css`, in document order.
pub fn find_target<'a>(
    document: &'a Html,
    css: &str,
    nth: usize,
) -> Result<ElementRef<'a>, WhichQueryError> {
    let selector = selector(css)?;
    document
        .select(&selector)
        .nth(nth)
        .ok_or_else(|| WhichQueryError::TargetNotFound(format!("{} (index {})", css, nth)))
}
