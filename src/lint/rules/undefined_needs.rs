//! Unresolved `needs` reference detection.
//!
//! This rule verifies that every job listed in a `needs` sequence exists
//! in the current file.

use serde_yaml::{Mapping, Value};

use crate::lint::diagnostic::{Category, LintError};
use crate::lint::jobs::JobUniverse;
use crate::lint::refs::NeedsRef;
use crate::lint::rule::SemanticRule;

/// Detects `needs` references to jobs that do not exist.
///
/// Optional needs and cross-project needs are exempt. Hidden templates
/// are valid targets but are not themselves checked, since they are never
/// scheduled.
pub struct UndefinedNeedsRule;

impl SemanticRule for UndefinedNeedsRule {
    fn category(&self) -> Category {
        Category::Needs
    }

    fn name(&self) -> &str {
        "Undefined Needs"
    }

    fn description(&self) -> &str {
        "Ensures all needs references exist in this file"
    }

    fn check(&self, _doc: &Mapping, universe: &JobUniverse<'_>) -> Vec<LintError> {
        let mut errors = Vec::new();

        for (job_name, body) in universe.regular_jobs() {
            // A non-sequence needs value is a schema violation, not ours.
            let Some(Value::Sequence(needs)) = body.get("needs") else {
                continue;
            };

            for entry in needs {
                let Some(need) = NeedsRef::parse(entry) else {
                    continue;
                };
                if let Some(target) = need.required_local_target() {
                    if !universe.contains(target) {
                        errors.push(LintError::new(
                            self.category(),
                            format!(
                                "Job '{job_name}' needs '{target}', which does not exist in this file."
                            ),
                        ));
                    }
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(yaml: &str) -> Vec<LintError> {
        let doc: Mapping = serde_yaml::from_str(yaml).unwrap();
        let universe = JobUniverse::classify(&doc);
        UndefinedNeedsRule.check(&doc, &universe)
    }

    #[test]
    fn valid_needs_reference() {
        let errors = check(
            "build:\n  script: echo\ntest:\n  script: echo\n  needs: [build]\n",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn detects_unknown_job() {
        let errors = check("test:\n  script: echo\n  needs: [nonexistent]\n");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].category, Category::Needs);
        assert!(errors[0].message.contains("nonexistent"));
        assert!(errors[0].message.contains("test"));
    }

    #[test]
    fn empty_needs_sequence() {
        let errors = check("build:\n  script: echo\n  needs: []\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn object_form_resolves() {
        let errors = check(
            "build:\n  script: echo\ntest:\n  script: echo\n  needs:\n    - job: build\n",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn object_form_detects_missing() {
        let errors = check("test:\n  script: echo\n  needs:\n    - job: missing\n");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("missing"));
    }

    #[test]
    fn optional_need_suppresses_error() {
        let errors = check(
            "test:\n  script: echo\n  needs:\n    - job: missing\n      optional: true\n",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn cross_project_need_is_skipped() {
        let errors = check(
            "build:\n  script: echo\n  needs:\n    - project: other/project\n      job: external-job\n",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn multiple_missing_needs_each_reported() {
        let errors = check("build:\n  script: echo\n  needs: [missing1, missing2]\n");
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.message.contains("missing1")));
        assert!(errors.iter().any(|e| e.message.contains("missing2")));
    }

    #[test]
    fn hidden_template_is_a_valid_target() {
        let errors = check(
            ".prep:\n  script: echo\nbuild:\n  script: echo\n  needs: ['.prep']\n",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn self_reference_resolves_trivially() {
        let errors = check("build:\n  script: echo\n  needs: [build]\n");
        assert!(errors.is_empty());
    }

    #[test]
    fn non_sequence_needs_is_left_to_schema() {
        let errors = check("build:\n  script: echo\n  needs: build\n");
        assert!(errors.is_empty());
    }
}
