//! Job classification.
//!
//! A GitLab CI document mixes three kinds of top-level keys: reserved
//! global keywords (`stages`, `variables`, ...), hidden templates
//! (`.`-prefixed entries that exist only as `extends`/`needs` targets),
//! and regular job definitions. [`JobUniverse`] partitions them and is the
//! membership set every reference check resolves against.

use std::collections::HashMap;

use serde_yaml::{Mapping, Value};

/// Top-level keys that are global configuration, never jobs.
pub const RESERVED_KEYWORDS: [&str; 12] = [
    "image",
    "services",
    "stages",
    "types",
    "before_script",
    "after_script",
    "variables",
    "cache",
    "include",
    "workflow",
    "default",
    "pages",
];

/// Stage names assumed when the document declares no `stages:` list.
pub const DEFAULT_STAGES: [&str; 3] = ["build", "test", "deploy"];

/// All job-like entries of a document: regular jobs and hidden templates.
///
/// Iteration follows document order, which keeps every downstream check
/// deterministic. Borrows the document; built fresh per lint invocation.
pub struct JobUniverse<'a> {
    entries: Vec<(&'a str, &'a Mapping)>,
    bodies: HashMap<&'a str, &'a Mapping>,
}

impl<'a> JobUniverse<'a> {
    /// Classify the top-level keys of a decoded document.
    ///
    /// Reserved keywords and non-mapping values are excluded; hidden
    /// templates are included so they can satisfy reference checks.
    pub fn classify(doc: &'a Mapping) -> Self {
        let mut entries = Vec::new();
        for (key, value) in doc {
            let (Value::String(name), Value::Mapping(body)) = (key, value) else {
                continue;
            };
            if RESERVED_KEYWORDS.contains(&name.as_str()) {
                continue;
            }
            entries.push((name.as_str(), body));
        }
        let bodies = entries.iter().copied().collect();
        Self { entries, bodies }
    }

    /// Whether `name` is a member (job or hidden template).
    pub fn contains(&self, name: &str) -> bool {
        self.bodies.contains_key(name)
    }

    /// The body of a member, if present.
    pub fn get(&self, name: &str) -> Option<&'a Mapping> {
        self.bodies.get(name).copied()
    }

    /// All members in document order, hidden templates included.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Mapping)> + '_ {
        self.entries.iter().copied()
    }

    /// Regular jobs only, in document order. Hidden templates are never
    /// scheduled, so stage and needs checks skip them.
    pub fn regular_jobs(&self) -> impl Iterator<Item = (&'a str, &'a Mapping)> + '_ {
        self.entries
            .iter()
            .copied()
            .filter(|(name, _)| !name.starts_with('.'))
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document defines no jobs or templates at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The effective stage set for a document.
///
/// The explicit `stages:` sequence when present, otherwise
/// [`DEFAULT_STAGES`]. Non-string entries in an explicit list are ignored
/// here; the schema layer reports their shape.
pub fn defined_stages(doc: &Mapping) -> Vec<&str> {
    match doc.get("stages").and_then(Value::as_sequence) {
        Some(stages) => stages.iter().filter_map(Value::as_str).collect(),
        None => DEFAULT_STAGES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn extracts_regular_jobs() {
        let doc = doc("build:\n  script: echo\n");
        let universe = JobUniverse::classify(&doc);
        assert!(universe.contains("build"));
        assert_eq!(universe.len(), 1);
    }

    #[test]
    fn filters_reserved_keywords() {
        let doc = doc("stages: [test]\nvariables:\n  FOO: bar\nbuild:\n  script: echo\n");
        let universe = JobUniverse::classify(&doc);
        assert!(universe.contains("build"));
        assert!(!universe.contains("stages"));
        assert!(!universe.contains("variables"));
        assert_eq!(universe.len(), 1);
    }

    #[test]
    fn hidden_templates_are_members_but_not_regular_jobs() {
        let doc = doc(".template:\n  script: echo\nbuild:\n  script: echo\n");
        let universe = JobUniverse::classify(&doc);
        assert!(universe.contains(".template"));
        assert!(universe.contains("build"));
        let regular: Vec<_> = universe.regular_jobs().map(|(n, _)| n).collect();
        assert_eq!(regular, vec!["build"]);
    }

    #[test]
    fn non_mapping_values_are_excluded() {
        let doc = doc("build:\n  script: echo\nsome_string: value\n");
        let universe = JobUniverse::classify(&doc);
        assert!(universe.contains("build"));
        assert!(!universe.contains("some_string"));
    }

    #[test]
    fn empty_document_has_empty_universe() {
        let doc = Mapping::new();
        let universe = JobUniverse::classify(&doc);
        assert!(universe.is_empty());
    }

    #[test]
    fn only_reserved_keywords_yield_empty_universe() {
        let doc = doc("default: {}\nworkflow: {}\nvariables: {}\n");
        let universe = JobUniverse::classify(&doc);
        assert!(universe.is_empty());
    }

    #[test]
    fn iteration_preserves_document_order() {
        let doc = doc("b:\n  script: x\na:\n  script: y\nc:\n  script: z\n");
        let universe = JobUniverse::classify(&doc);
        let names: Vec<_> = universe.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn explicit_stages_used_verbatim() {
        let doc = doc("stages: [compile, verify]\n");
        assert_eq!(defined_stages(&doc), vec!["compile", "verify"]);
    }

    #[test]
    fn default_stages_when_undeclared() {
        let doc = doc("build:\n  script: echo\n");
        assert_eq!(defined_stages(&doc), vec!["build", "test", "deploy"]);
    }
}
