//! Undefined stage detection.
//!
//! This rule verifies that every stage a job declares is drawn from the
//! document's stage set.

use serde_yaml::{Mapping, Value};

use crate::lint::diagnostic::{Category, LintError};
use crate::lint::jobs::{defined_stages, JobUniverse};
use crate::lint::rule::SemanticRule;

/// Detects jobs assigned to stages that are not defined.
///
/// The stage set is the explicit `stages:` sequence, or `build`, `test`,
/// `deploy` when the document declares none. Jobs without a `stage` field
/// are not checked, and hidden templates are exempt.
pub struct UndefinedStageRule;

impl SemanticRule for UndefinedStageRule {
    fn category(&self) -> Category {
        Category::Stage
    }

    fn name(&self) -> &str {
        "Undefined Stage"
    }

    fn description(&self) -> &str {
        "Ensures every declared stage is in the stage set"
    }

    fn check(&self, doc: &Mapping, universe: &JobUniverse<'_>) -> Vec<LintError> {
        let stages = defined_stages(doc);
        let mut errors = Vec::new();

        for (job_name, body) in universe.regular_jobs() {
            let Some(stage) = body.get("stage").and_then(Value::as_str) else {
                continue;
            };
            if !stages.contains(&stage) {
                errors.push(LintError::new(
                    self.category(),
                    format!("Job '{job_name}' is assigned to stage '{stage}', which is not defined."),
                ));
            }
        }

        errors
    }
}
