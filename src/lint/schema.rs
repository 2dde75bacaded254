//! GitLab CI JSON Schema generation and validation.
//!
//! The schema is generated in code rather than bundled as a data file.
//! It covers the reserved global keywords and treats every other
//! top-level key as a job object. Job objects are open (GitLab grows
//! keywords faster than we do), but keywords the semantic checks rely on
//! (`stage`, `needs`, `extends`) and `artifacts` are typed strictly.

use serde_json::{json, Value};

use crate::error::{CiLintError, Result};
use crate::lint::diagnostic::{Category, LintError};

/// Generates the JSON Schema (draft 2020-12) for GitLab CI configuration.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete schema for a `.gitlab-ci.yml` document.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "$id": "https://gitlab-ci-lint.dev/schemas/ci.json",
            "title": "GitLab CI Configuration",
            "type": "object",
            "properties": {
                "stages": {
                    "type": "array",
                    "items": { "type": "string" },
                    "minItems": 1,
                    "description": "Ordered list of pipeline stages"
                },
                "types": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Deprecated alias for stages"
                },
                "image": self.image_schema(),
                "services": { "type": "array" },
                "before_script": self.script_schema(),
                "after_script": self.script_schema(),
                "variables": { "type": "object" },
                "cache": {},
                "include": {},
                "workflow": { "type": "object" },
                "default": { "type": "object" },
                "pages": self.job_schema()
            },
            "additionalProperties": self.job_schema()
        })
    }

    /// Schema for a job (or hidden template) object.
    ///
    /// Kept open: unknown job keys are tolerated so the linter does not
    /// lag behind GitLab's keyword set.
    fn job_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "script": self.script_schema(),
                "before_script": self.script_schema(),
                "after_script": self.script_schema(),
                "stage": { "type": "string" },
                "extends": {
                    "anyOf": [
                        { "type": "string" },
                        { "type": "array", "items": { "type": "string" } }
                    ]
                },
                "needs": {
                    "type": "array",
                    "items": self.needs_item_schema()
                },
                "image": self.image_schema(),
                "services": { "type": "array" },
                "variables": { "type": "object" },
                "artifacts": self.artifacts_schema(),
                "rules": { "type": "array" },
                "tags": { "type": "array", "items": { "type": "string" } },
                "dependencies": { "type": "array", "items": { "type": "string" } },
                "when": {
                    "enum": ["on_success", "on_failure", "always", "never", "manual", "delayed"]
                },
                "allow_failure": {
                    "anyOf": [
                        { "type": "boolean" },
                        { "type": "object" }
                    ]
                },
                "timeout": { "type": "string" },
                "coverage": { "type": "string" },
                "interruptible": { "type": "boolean" },
                "resource_group": { "type": "string" },
                "environment": {},
                "trigger": {},
                "parallel": {},
                "retry": {},
                "cache": {},
                "only": {},
                "except": {}
            },
            "additionalProperties": true
        })
    }

    /// One entry of a `needs` sequence: bare name or object form.
    fn needs_item_schema(&self) -> Value {
        json!({
            "anyOf": [
                { "type": "string" },
                {
                    "type": "object",
                    "properties": {
                        "job": { "type": "string" },
                        "project": { "type": "string" },
                        "ref": { "type": "string" },
                        "pipeline": { "type": "string" },
                        "optional": { "type": "boolean" },
                        "artifacts": { "type": "boolean" }
                    },
                    "additionalProperties": false
                }
            ]
        })
    }

    /// Schema for `artifacts`. Closed: unknown keys here are almost
    /// always typos (`path` for `paths`).
    fn artifacts_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "paths": { "type": "array", "items": { "type": "string" } },
                "exclude": { "type": "array", "items": { "type": "string" } },
                "expire_in": { "type": "string" },
                "expose_as": { "type": "string" },
                "name": { "type": "string" },
                "public": { "type": "boolean" },
                "untracked": { "type": "boolean" },
                "when": { "enum": ["on_success", "on_failure", "always"] },
                "reports": { "type": "object" }
            },
            "additionalProperties": false
        })
    }

    /// A script value: one command or a list (possibly nested one level,
    /// as produced by YAML anchors).
    fn script_schema(&self) -> Value {
        json!({
            "anyOf": [
                { "type": "string" },
                {
                    "type": "array",
                    "items": {
                        "anyOf": [
                            { "type": "string" },
                            { "type": "array", "items": { "type": "string" } }
                        ]
                    }
                }
            ]
        })
    }

    /// An `image` value: bare name or object with entrypoint.
    fn image_schema(&self) -> Value {
        json!({
            "anyOf": [
                { "type": "string" },
                {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "entrypoint": { "type": "array", "items": { "type": "string" } }
                    },
                    "additionalProperties": true
                }
            ]
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates decoded documents against the generated schema.
///
/// Compiled once per [`Linter`](crate::lint::Linter) and safe for
/// concurrent reads.
pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    /// Compile the generated schema.
    ///
    /// # Errors
    ///
    /// Returns [`CiLintError::InvalidSchema`] if the generated schema is
    /// not a valid JSON Schema.
    pub fn new() -> Result<Self> {
        let schema = SchemaGenerator::new().generate();
        let validator = jsonschema::options()
            .build(&schema)
            .map_err(|e| CiLintError::InvalidSchema {
                message: e.to_string(),
            })?;
        Ok(Self { validator })
    }

    /// Validate a document, returning one `schema` error per violation,
    /// each carrying the instance path of the offending value.
    pub fn validate(&self, doc: &Value) -> Vec<LintError> {
        self.validator
            .iter_errors(doc)
            .map(|error| {
                let path = error.instance_path.to_string();
                let message = if path.is_empty() {
                    format!("Schema error: {error}")
                } else {
                    format!("Schema error at '{path}': {error}")
                };
                LintError::new(Category::Schema, message)
            })
            .collect()
    }
}
