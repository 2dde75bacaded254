//! Reference shapes for `needs` and `extends`.
//!
//! GitLab accepts several spellings for both relations: a bare name, a
//! sequence of names, or (for `needs`) an object carrying a `job` key with
//! modifier flags. Each spelling is normalized into a tagged variant here
//! so the checkers resolve them uniformly instead of re-inspecting raw
//! YAML shapes.

use serde_yaml::{Mapping, Value};

/// One entry of a job's `needs` sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NeedsRef<'a> {
    /// Shorthand form: a bare job name.
    Name(&'a str),
    /// Object form: `{job: ..., optional: ..., project: ...}`.
    Detailed {
        job: Option<&'a str>,
        /// When true, an unresolved reference is not an error.
        optional: bool,
        /// A need carrying a `project` key targets another pipeline and
        /// cannot be resolved locally.
        cross_project: bool,
    },
}

impl<'a> NeedsRef<'a> {
    /// Normalize one raw `needs` entry. Shapes the schema rejects (e.g. a
    /// number) yield `None` and are left to schema validation.
    pub fn parse(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(NeedsRef::Name(name)),
            Value::Mapping(entry) => Some(NeedsRef::Detailed {
                job: entry.get("job").and_then(Value::as_str),
                optional: entry
                    .get("optional")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                cross_project: entry.contains_key("project"),
            }),
            _ => None,
        }
    }

    /// The job name this entry must resolve against the local universe,
    /// or `None` when nothing local is required (optional or
    /// cross-project needs, or an object without a `job` key).
    pub fn required_local_target(&self) -> Option<&'a str> {
        match *self {
            NeedsRef::Name(name) => Some(name),
            NeedsRef::Detailed {
                job,
                optional,
                cross_project,
            } => {
                if optional || cross_project {
                    None
                } else {
                    job
                }
            }
        }
    }
}

/// The `extends` targets of a job body, in declaration order.
///
/// Handles both the single-name and the sequence spelling. Non-string
/// entries are skipped; the schema layer reports them.
pub fn extends_targets(body: &Mapping) -> Vec<&str> {
    match body.get("extends") {
        Some(Value::String(name)) => vec![name.as_str()],
        Some(Value::Sequence(names)) => names.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}
