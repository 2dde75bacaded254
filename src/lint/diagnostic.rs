//! Lint error and result types.
//!
//! This module provides [`LintError`], the immutable record for a single
//! problem found in a configuration document, and [`LintResult`], the
//! ordered collection returned by every lint entry point.

use serde::Serialize;

/// The kind of problem a [`LintError`] describes.
///
/// Categories are carried for programmatic distinction; presentation
/// layers are free to render only the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// The document could not be read, decoded, or is not a mapping.
    Syntax,
    /// Structural violation against the GitLab CI JSON Schema.
    Schema,
    /// A `needs` entry references a job that does not exist.
    Needs,
    /// A job is assigned to a stage that is not defined.
    Stage,
    /// An `extends` entry references a job that does not exist.
    Extends,
    /// The `extends` graph contains a cycle.
    CircularExtends,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Syntax => write!(f, "syntax"),
            Category::Schema => write!(f, "schema"),
            Category::Needs => write!(f, "needs"),
            Category::Stage => write!(f, "stage"),
            Category::Extends => write!(f, "extends"),
            Category::CircularExtends => write!(f, "circular-extends"),
        }
    }
}

/// A single problem found in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintError {
    /// What kind of check produced this error.
    pub category: Category,
    /// Human-readable message.
    pub message: String,
}

impl LintError {
    /// Create a new lint error.
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

/// The outcome of linting one document.
///
/// Errors are ordered by check: schema first, then needs, stage, extends,
/// and circular-extends. A document is valid iff the list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintResult {
    /// Every problem found, in check order.
    pub errors: Vec<LintError>,
}

impl LintResult {
    /// A result with no errors.
    pub fn valid() -> Self {
        Self::default()
    }

    /// A result carrying a single error.
    pub fn single(error: LintError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Whether the document passed every check.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors of one category, in order.
    pub fn errors_in(&self, category: Category) -> impl Iterator<Item = &LintError> {
        self.errors.iter().filter(move |e| e.category == category)
    }
}
