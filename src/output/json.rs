use super::Report;
use crate::error::WhichQueryError;

/// Format a report as pretty-printed JSON.
pub fn format_output(report: &Report) -> Result<String, WhichQueryError> {
    Ok(serde_json::to_string_pretty(report)?)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::VariantResult;
    use crate::variant::Variant;

    #[test]
    fn variants_serialize_as_tokens() {
        let report = Report {
            target: "li".to_string(),
            results: vec![VariantResult {
                variant: Variant::FindAllBy,
                suggestion: None,
                highlights: Vec::new(),
            }],
        };
        let json: serde_json::Value = serde_json::from_str(&format_output(&report).unwrap()).unwrap();
        assert_eq!(json["target"], "li");
        assert_eq!(json["results"][0]["variant"], "findAllBy");
        assert!(json["results"][0]["suggestion"].is_null());
        assert!(json["results"][0].get("highlights").is_none());
    }
}
