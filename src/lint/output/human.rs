//! Human-readable output formatter.
//!
//! One block per file: a check mark for clean files, a cross and a
//! bulleted error list otherwise.

use std::io::Write;

use console::style;

use super::{FileReport, LintFormatter};

/// Formats lint output for terminal display.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: String, good: bool) -> String {
        if !self.use_color {
            return text;
        }
        if good {
            style(text).green().to_string()
        } else {
            style(text).red().to_string()
        }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        for report in reports {
            if report.result.is_valid() {
                let line = format!("✓ {} is valid", report.path);
                writeln!(writer, "{}", self.paint(line, true))?;
            } else {
                let header = format!(
                    "✗ {} has {} error(s):",
                    report.path,
                    report.result.errors.len()
                );
                writeln!(writer, "{}", self.paint(header, false))?;
                for error in &report.result.errors {
                    writeln!(writer, "  - [{}] {}", error.category, error.message)?;
                }
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}
