use super::Report;

pub const NO_SUGGESTION: &str = "No suggestion found";

/// Format a report as plain text. A single result prints the bare suggestion;
/// several results each get a `// <variant>` header.
pub fn format_output(report: &Report) -> String {
    let mut output = String::new();
    let headed = report.results.len() > 1;

    for (i, result) in report.results.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        if headed {
            output.push_str(&format!("// {}\n", result.variant));
        }
        output.push_str(result.suggestion.as_deref().unwrap_or(NO_SUGGESTION));
        output.push('\n');
        for entry in &result.highlights {
            output.push_str(&format!("  [{:?}] {}  {}\n", entry.kind, entry.element, entry.style));
        }
    }

    output
}
