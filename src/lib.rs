//! gitlab-ci-lint - Offline validator for GitLab CI pipeline configuration.
//!
//! Validates `.gitlab-ci.yml` documents without contacting a GitLab
//! instance, combining JSON Schema conformance with semantic consistency
//! checks (unresolved `needs`/`extends` references, undefined stages,
//! circular `extends` chains).
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`lint`] - The lint engine: job classification, semantic rules,
//!   schema validation, and output formatting
//!
//! # Example
//!
//! ```
//! use gitlab_ci_lint::lint::Linter;
//!
//! let linter = Linter::new().unwrap();
//! let result = linter.lint("stages:\n  - build\nbuild:\n  stage: build\n  script: echo hello\n");
//! assert!(result.is_valid());
//! ```

pub mod cli;
pub mod error;
pub mod lint;

pub use error::{CiLintError, Result};
