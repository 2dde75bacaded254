//! Lint output formatters.
//!
//! This module provides formatters for presenting per-file lint results
//! in different formats (human-readable text, JSON).

pub mod human;
pub mod json;

use std::io::Write;

use crate::lint::diagnostic::LintResult;

/// The lint outcome for one file, ready for presentation.
pub struct FileReport {
    /// The path as given on the command line.
    pub path: String,
    /// Every error found in the file.
    pub result: LintResult,
}

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Trait for formatting lint reports.
pub trait LintFormatter {
    /// Format reports to the given writer.
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
