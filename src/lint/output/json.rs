//! JSON output formatter.
//!
//! Formats lint reports as machine-readable JSON for tooling integration.

use std::io::Write;

use serde::Serialize;

use super::{FileReport, LintFormatter};

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonReport<'a> {
    path: &'a str,
    valid: bool,
    errors: Vec<JsonError<'a>>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    category: String,
    message: &'a str,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        let output: Vec<_> = reports
            .iter()
            .map(|report| JsonReport {
                path: &report.path,
                valid: report.result.is_valid(),
                errors: report
                    .result
                    .errors
                    .iter()
                    .map(|e| JsonError {
                        category: e.category.to_string(),
                        message: &e.message,
                    })
                    .collect(),
            })
            .collect();

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::diagnostic::{Category, LintError, LintResult};

    fn render(reports: &[FileReport]) -> serde_json::Value {
        let formatter = JsonFormatter::new();
        let mut output = Vec::new();
        formatter.format(reports, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn valid_file_serializes() {
        let value = render(&[FileReport {
            path: "ci.yml".into(),
            result: LintResult::valid(),
        }]);
        assert_eq!(value[0]["path"], "ci.yml");
        assert_eq!(value[0]["valid"], true);
        assert_eq!(value[0]["errors"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn errors_carry_category_and_message() {
        let value = render(&[FileReport {
            path: "ci.yml".into(),
            result: LintResult::single(LintError::new(
                Category::CircularExtends,
                "Circular dependency detected in 'extends': a -> a",
            )),
        }]);
        assert_eq!(value[0]["valid"], false);
        assert_eq!(value[0]["errors"][0]["category"], "circular-extends");
        assert!(value[0]["errors"][0]["message"]
            .as_str()
            .unwrap()
            .contains("a -> a"));
    }
}
