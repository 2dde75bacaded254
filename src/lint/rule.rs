//! Semantic rule definitions.
//!
//! Each consistency check on a decoded document is a [`SemanticRule`].
//! Rules are pure: they read the document and the job universe and return
//! zero or more errors, never mutating either.

use serde_yaml::Mapping;

use super::diagnostic::{Category, LintError};
use super::jobs::JobUniverse;

/// A semantic consistency check over a configuration document.
///
/// Rules run after schema validation, in a fixed order chosen by the
/// [`Linter`](super::Linter), and every rule runs even when earlier rules
/// already produced errors.
pub trait SemanticRule: Send + Sync {
    /// The error category this rule reports under.
    fn category(&self) -> Category;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Check the document and return any errors, in document order.
    fn check(&self, doc: &Mapping, universe: &JobUniverse<'_>) -> Vec<LintError>;
}
