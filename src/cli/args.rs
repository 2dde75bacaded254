//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use std::path::PathBuf;

use clap::Parser;

use crate::lint::OutputFormat;

/// gitlab-ci-lint - Validate GitLab CI/CD configuration files.
#[derive(Debug, Parser)]
#[command(name = "gitlab-ci-lint")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Configuration files to validate
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
