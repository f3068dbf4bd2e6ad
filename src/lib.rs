mod error;
pub mod config;
pub mod dom;
pub mod entry;
pub mod highlight;
pub mod output;
pub mod parser;
pub mod roles;
pub mod strategies;
pub mod suggest;
pub mod variant;
pub mod walk;

use std::fs;
use std::path::{Path, PathBuf};

pub use entry::get_suggestion_for;
pub use error::WhichQueryError;
pub use output::{OutputFormat, Report, VariantResult};
pub use suggest::find_suggested_query;
pub use variant::Variant;

use entry::{FileSink, NullSink, SuggestionSink};
use highlight::{HighlightLog, Highlighter, NoHighlight};

/// Options for suggesting queries for an element of an HTML file
pub struct SuggestOptions {
    /// CSS selector picking the clicked element
    pub selector: String,
    /// Which match of `selector` to use (0-based)
    pub nth: usize,
    pub variants: Vec<Variant>,
    pub debug: bool,
    pub format: OutputFormat,
    /// File receiving the last suggestion found
    pub output: Option<PathBuf>,
}

/// Run the requested searches against an HTML source.
pub fn suggest_html(source: &str, options: &SuggestOptions) -> Result<Report, WhichQueryError> {
    let document = parser::parse(source);
    let clicked = parser::find_target(&document, &options.selector, options.nth)?;
    let target = dom::describe(entry::resolve_interactive(clicked));

    let mut sink: Box<dyn SuggestionSink> = match &options.output {
        Some(path) => Box::new(FileSink { path: path.clone() }),
        None => Box::new(NullSink),
    };

    let results = options
        .variants
        .iter()
        .map(|&variant| {
            let mut log = HighlightLog::default();
            let mut quiet = NoHighlight;
            let highlighter: &mut dyn Highlighter = if options.debug { &mut log } else { &mut quiet };
            let suggestion = get_suggestion_for(
                &document,
                clicked,
                variant,
                options.debug,
                sink.as_mut(),
                highlighter,
            );
            VariantResult {
                variant,
                suggestion,
                highlights: log.entries,
            }
        })
        .collect();

    Ok(Report { target, results })
}

/// Read an HTML file, run the requested searches and return formatted output
pub fn suggest_path(path: &str, options: SuggestOptions) -> Result<String, WhichQueryError> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(WhichQueryError::PathNotFound(path.display().to_string()));
    }

    let source = fs::read_to_string(path).map_err(|e| WhichQueryError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let report = suggest_html(&source, &options)?;
    match options.format {
        OutputFormat::Plain => Ok(output::plain::format_output(&report)),
        OutputFormat::Json => output::json::format_output(&report),
    }
}
