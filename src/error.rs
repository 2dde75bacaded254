//! Error types for gitlab-ci-lint operations.
//!
//! This module defines [`CiLintError`], the error type for operational
//! failures (a broken bundled schema, I/O outside the lint path), and a
//! [`Result`] type alias for convenience.
//!
//! Lint findings are not errors in this sense: every problem discovered in
//! a configuration document is collected as a value in
//! [`crate::lint::LintResult`], and `lint`/`lint_file` never fail.

use thiserror::Error;

/// Core error type for gitlab-ci-lint operations.
#[derive(Debug, Error)]
pub enum CiLintError {
    /// The bundled GitLab CI schema failed to compile.
    #[error("Invalid bundled schema: {message}")]
    InvalidSchema { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gitlab-ci-lint operations.
pub type Result<T> = std::result::Result<T, CiLintError>;
