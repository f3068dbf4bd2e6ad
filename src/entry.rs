use crate::dom;
use crate::error::WhichQueryError;
use crate::highlight::{Highlight, Highlighter};
use crate::suggest::find_suggested_query;
use crate::variant::Variant;
use scraper::{ElementRef, Html, Selector};
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{error, info};

/// Elements a click is resolved to: the clicked element or its nearest interactive ancestor.
pub const INTERACTIVE_SELECTORS: &[&str] = &[
    "input:not([disabled])",
    "button:not([disabled])",
    "select:not([disabled])",
    "textarea:not([disabled])",
    "a[href]",
    "[tabindex]:not([disabled])",
    "[role]",
];

/// Where a finished suggestion is delivered (the clipboard, in a browser).
pub trait SuggestionSink {
    fn write_text(&mut self, text: &str) -> Result<(), WhichQueryError>;
}

/// Discards suggestions.
pub struct NullSink;

impl SuggestionSink for NullSink {
    fn write_text(&mut self, _text: &str) -> Result<(), WhichQueryError> {
        Ok(())
    }
}

/// Keeps every delivered suggestion in memory.
impl SuggestionSink for Vec<String> {
    fn write_text(&mut self, text: &str) -> Result<(), WhichQueryError> {
        self.push(text.to_string());
        Ok(())
    }
}

/// Overwrites a file with the latest suggestion.
pub struct FileSink {
    pub path: PathBuf,
}

impl SuggestionSink for FileSink {
    fn write_text(&mut self, text: &str) -> Result<(), WhichQueryError> {
        fs::write(&self.path, text).map_err(|e| WhichQueryError::WriteError {
            path: self.path.display().to_string(),
            source: e,
        })
    }
}

/// The element itself when interactive, else its nearest interactive ancestor,
/// else the element unchanged.
pub fn resolve_interactive(element: ElementRef<'_>) -> ElementRef<'_> {
    dom::closest(element, interactive()).unwrap_or(element)
}

fn interactive() -> &'static Selector {
    static INTERACTIVE: OnceLock<Selector> = OnceLock::new();
    INTERACTIVE.get_or_init(|| Selector::parse(&INTERACTIVE_SELECTORS.join(", ")).unwrap())
}

/// Suggest a query for a clicked element and deliver it to `sink`.
///
/// Sink failures are logged and do not affect the returned suggestion.
pub fn get_suggestion_for(
    document: &Html,
    element: ElementRef<'_>,
    variant: Variant,
    debug: bool,
    sink: &mut dyn SuggestionSink,
    highlighter: &mut dyn Highlighter,
) -> Option<String> {
    if debug {
        highlighter.highlight(element, Highlight::Target);
    }

    let target = resolve_interactive(element);
    let suggestion = find_suggested_query(document, target, variant, debug, highlighter);
    match &suggestion {
        Some(text) => {
            if let Err(e) = sink.write_text(text) {
                error!(error = %e, "failed to deliver suggestion");
            }
            info!(%variant, "{}", text);
        }
        None => info!(%variant, "No suggestion found"),
    }
    suggestion
}
