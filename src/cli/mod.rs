//! Command-line interface.
//!
//! Lints every file named on the command line, renders a combined report
//! in the requested format, and maps the outcome to an exit code: 0 when
//! every file is clean, 1 otherwise.

pub mod args;

pub use args::Cli;

use std::process::ExitCode;

use console::colors_enabled;

use crate::error::Result;
use crate::lint::{
    FileReport, HumanFormatter, JsonFormatter, LintFormatter, Linter, OutputFormat,
};

/// Lint the requested files and render the report to stdout.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let linter = Linter::new()?;

    let reports: Vec<FileReport> = cli
        .files
        .iter()
        .map(|path| {
            tracing::debug!(path = %path.display(), "linting file");
            FileReport {
                path: path.display().to_string(),
                result: linter.lint_file(path),
            }
        })
        .collect();

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Json => JsonFormatter::new().format(&reports, &mut stdout)?,
        OutputFormat::Text => {
            let use_color = !cli.no_color && colors_enabled();
            HumanFormatter::new(use_color).format(&reports, &mut stdout)?;
        }
    }

    let has_errors = reports.iter().any(|r| !r.result.is_valid());
    Ok(if has_errors {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
