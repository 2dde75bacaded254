//! The lint engine.
//!
//! # Overview
//!
//! Linting a document runs in one pass:
//!
//! 1. Decode the YAML text. A decode failure or a non-mapping root yields
//!    a single `syntax` error and nothing else runs.
//! 2. Validate against the generated GitLab CI JSON Schema, collecting
//!    `schema` errors.
//! 3. Classify top-level keys into the [`JobUniverse`](jobs::JobUniverse)
//!    and run every semantic rule in fixed order: needs, stage, extends,
//!    circular-extends.
//!
//! Every check runs even when earlier checks failed, so one invocation
//! surfaces all problems. All state is per-invocation; a [`Linter`] can
//! be shared across threads and files.
//!
//! # Example
//!
//! ```
//! use gitlab_ci_lint::lint::{Category, Linter};
//!
//! let linter = Linter::new().unwrap();
//! let result = linter.lint("a:\n  extends: a\n");
//! assert!(!result.is_valid());
//! assert_eq!(result.errors[0].category, Category::CircularExtends);
//! ```

pub mod diagnostic;
pub mod jobs;
pub mod output;
pub mod refs;
pub mod rule;
pub mod rules;
pub mod schema;

pub use diagnostic::{Category, LintError, LintResult};
pub use jobs::{JobUniverse, DEFAULT_STAGES, RESERVED_KEYWORDS};
pub use output::{FileReport, HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use rule::SemanticRule;
pub use schema::{SchemaGenerator, SchemaValidator};

use std::path::Path;

use serde_yaml::Value;

use crate::error::Result;

/// The lint orchestrator.
///
/// Holds the compiled schema and the rule sequence; everything else is
/// built fresh per document.
pub struct Linter {
    schema: SchemaValidator,
    rules: Vec<Box<dyn SemanticRule>>,
}

impl Linter {
    /// Create a linter with the bundled schema and all built-in rules.
    ///
    /// # Errors
    ///
    /// Fails only if the generated schema does not compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            schema: SchemaValidator::new()?,
            rules: rules::builtins(),
        })
    }

    /// Lint YAML content and return every problem found.
    ///
    /// Never fails: syntax problems are reported as errors in the result.
    pub fn lint(&self, content: &str) -> LintResult {
        let value: Value = match serde_yaml::from_str(content) {
            Ok(value) => value,
            Err(e) => {
                return LintResult::single(LintError::new(
                    Category::Syntax,
                    format!("YAML parsing error: {e}"),
                ));
            }
        };

        let Value::Mapping(doc) = value else {
            return LintResult::single(LintError::new(
                Category::Syntax,
                "Invalid configuration: file is empty or not a mapping",
            ));
        };

        let mut errors = Vec::new();

        match serde_json::to_value(&doc) {
            Ok(json) => errors.extend(self.schema.validate(&json)),
            // Documents that cannot round-trip to JSON (non-string keys
            // and the like) skip schema validation; the semantic checks
            // below still run on the decoded mapping.
            Err(e) => {
                tracing::debug!("document not representable as JSON: {e}");
                errors.push(LintError::new(
                    Category::Schema,
                    format!("Schema error: configuration is not representable as JSON: {e}"),
                ));
            }
        }

        let universe = JobUniverse::classify(&doc);
        tracing::debug!(jobs = universe.len(), "classified job universe");

        for rule in &self.rules {
            errors.extend(rule.check(&doc, &universe));
        }

        LintResult { errors }
    }

    /// Lint a file from disk.
    ///
    /// A read failure (missing file, directory, permissions) becomes a
    /// single `syntax` error; this method always returns a result.
    pub fn lint_file(&self, path: &Path) -> LintResult {
        match std::fs::read_to_string(path) {
            Ok(content) => self.lint(&content),
            Err(e) => LintResult::single(LintError::new(
                Category::Syntax,
                format!("Could not read file '{}': {e}", path.display()),
            )),
        }
    }
}
