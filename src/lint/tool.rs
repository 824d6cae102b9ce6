//! External tool invocation

use crate::config::ToolCommand;
use crate::error::{Result, TaskError};
use serde::Serialize;
use std::fmt;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// Which pass a tool invocation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Auto-fix pass (static analysis with fixes applied in place)
    Fix,
    /// Format pass
    Format,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Step::Fix => "fix",
            Step::Format => "format",
        })
    }
}

/// Where the tool's stdout goes. Stderr is always inherited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdoutRoute {
    /// Share our stdout
    #[default]
    Inherit,
    /// Send it to our stderr, keeping stdout free for a machine-readable report
    Stderr,
}

/// Status collected from one finished tool run
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: Step,
    /// The full command line as executed
    pub command: Vec<String>,
    /// Exit code, or None if the tool was killed by a signal
    pub exit_code: Option<i32>,
}

impl StepOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Exit code used when combining steps. A signal death or a code outside
    /// 0..=255 (Windows crash statuses are negative) counts as 1.
    pub fn effective_code(&self) -> i32 {
        match self.exit_code {
            Some(code @ 0..=255) => code,
            _ => 1,
        }
    }
}

/// Run one tool to completion inside `root` and collect its status.
///
/// The child is always waited on once spawned, so every path yields either a
/// definitive `StepOutcome` or a `ToolLaunch` error when the executable could
/// not be started.
pub fn run_tool(
    step: Step,
    tool: &ToolCommand,
    root: &Path,
    targets: &[String],
    stdout: StdoutRoute,
) -> Result<StepOutcome> {
    let command: Vec<String> = std::iter::once(tool.program.clone())
        .chain(tool.args.iter().cloned())
        .chain(targets.iter().cloned())
        .collect();

    let mut cmd = Command::new(&tool.program);
    cmd.args(&tool.args)
        .args(targets)
        .current_dir(root)
        .stdin(Stdio::null());
    if stdout == StdoutRoute::Stderr {
        cmd.stdout(io::stderr());
    }

    info!(%step, command = ?command, "running");
    let status = cmd.status().map_err(|source| TaskError::ToolLaunch {
        program: tool.program.clone(),
        source,
    })?;

    let exit_code = status.code();
    match exit_code {
        Some(0) => debug!(%step, "finished cleanly"),
        Some(code) => info!(%step, code, "finished with findings or errors"),
        None => warn!(%step, "terminated by signal"),
    }

    Ok(StepOutcome {
        step,
        command,
        exit_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_executable_is_launch_error() {
        let temp = TempDir::new().unwrap();
        let tool = ToolCommand::new("devtasks-no-such-tool-xyz", &["--fix"]);

        let result = run_tool(Step::Fix, &tool, temp.path(), &[".".to_string()], StdoutRoute::Stderr);

        match result {
            Err(TaskError::ToolLaunch { program, source }) => {
                assert_eq!(program, "devtasks-no-such-tool-xyz");
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected launch error, got {:?}", other),
        }
    }

    #[test]
    fn test_effective_code_treats_signal_as_failure() {
        let outcome = StepOutcome {
            step: Step::Format,
            command: vec!["fmt".to_string()],
            exit_code: None,
        };
        assert!(!outcome.success());
        assert_eq!(outcome.effective_code(), 1);
    }

    #[test]
    fn test_effective_code_treats_out_of_range_as_failure() {
        for code in [-1, -1073741819, 256] {
            let outcome = StepOutcome {
                step: Step::Fix,
                command: vec!["fix".to_string()],
                exit_code: Some(code),
            };
            assert_eq!(outcome.effective_code(), 1, "code {}", code);
        }
    }

    #[test]
    fn test_step_display() {
        assert_eq!(Step::Fix.to_string(), "fix");
        assert_eq!(Step::Format.to_string(), "format");
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_root_with_targets_appended() {
        let temp = TempDir::new().unwrap();
        let tool = ToolCommand::new("sh", &["-c", "echo \"$1\" > seen.txt", "sh"]);

        let outcome = run_tool(
            Step::Fix,
            &tool,
            temp.path(),
            &["src".to_string()],
            StdoutRoute::Stderr,
        )
        .unwrap();

        assert!(outcome.success());
        assert_eq!(
            outcome.command,
            vec!["sh", "-c", "echo \"$1\" > seen.txt", "sh", "src"]
        );
        let seen = std::fs::read_to_string(temp.path().join("seen.txt")).unwrap();
        assert_eq!(seen.trim(), "src");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_outcome_not_error() {
        let temp = TempDir::new().unwrap();
        let tool = ToolCommand::new("sh", &["-c", "exit 3"]);

        let outcome = run_tool(Step::Format, &tool, temp.path(), &[], StdoutRoute::Stderr).unwrap();

        assert_eq!(outcome.exit_code, Some(3));
        assert_eq!(outcome.effective_code(), 3);
    }
}
