//! Fix-then-format sequencing

use super::tool::{run_tool, Step, StepOutcome, StdoutRoute};
use crate::config::{Config, OutputFormat};
use crate::error::{Result, TaskError};
use serde::Serialize;
use tracing::{info, warn};

/// Outcome of a lint run, one entry per step that ran
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    pub steps: Vec<StepOutcome>,
}

impl LintReport {
    /// Combined status: the worst (largest) step code, 0 only if every step was clean
    pub fn exit_code(&self) -> i32 {
        self.steps
            .iter()
            .map(StepOutcome::effective_code)
            .max()
            .unwrap_or(0)
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == 0
    }
}

/// Run the fix pass, then the format pass.
///
/// The format pass still runs when the fix pass reports findings, but not
/// when the fix tool could not be launched at all.
pub fn lint(config: &Config) -> Result<LintReport> {
    if !config.root.is_dir() {
        return Err(TaskError::RootNotFound(config.root.clone()));
    }

    let route = match config.output_format {
        OutputFormat::Console => StdoutRoute::Inherit,
        OutputFormat::Json => StdoutRoute::Stderr,
    };
    let targets = &config.lint.targets;

    let fix = run_tool(Step::Fix, &config.lint.fix, &config.root, targets, route)?;
    let format = match run_tool(Step::Format, &config.lint.format, &config.root, targets, route) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(
                exit_code = ?fix.exit_code,
                command = ?fix.command,
                "fix pass already ran; files may have been modified"
            );
            return Err(e);
        }
    };

    let report = LintReport {
        steps: vec![fix, format],
    };
    info!(exit_code = report.exit_code(), "lint finished");
    Ok(report)
}
