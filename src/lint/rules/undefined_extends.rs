//! Unresolved `extends` reference detection.
//!
//! This rule verifies that every `extends` target names an entry present
//! in the file, hidden templates included.

use serde_yaml::Mapping;

use crate::lint::diagnostic::{Category, LintError};
use crate::lint::jobs::JobUniverse;
use crate::lint::refs::extends_targets;
use crate::lint::rule::SemanticRule;

/// Detects `extends` references to entries that do not exist.
///
/// Extending a regular job is permitted, so no distinction is made
/// between template and job targets. Hidden templates may themselves
/// extend, so the whole universe is walked.
pub struct UndefinedExtendsRule;

impl SemanticRule for UndefinedExtendsRule {
    fn category(&self) -> Category {
        Category::Extends
    }

    fn name(&self) -> &str {
        "Undefined Extends"
    }

    fn description(&self) -> &str {
        "Ensures all extends references exist"
    }

    fn check(&self, _doc: &Mapping, universe: &JobUniverse<'_>) -> Vec<LintError> {
        let mut errors = Vec::new();

        for (job_name, body) in universe.iter() {
            for target in extends_targets(body) {
                if !universe.contains(target) {
                    errors.push(LintError::new(
                        self.category(),
                        format!("Job '{job_name}' extends '{target}', which does not exist."),
                    ));
                }
            }
        }

        errors
    }
}
