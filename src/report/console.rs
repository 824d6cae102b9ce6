//! Console (human-readable) reporter

use crate::clean::CleanReport;
use crate::error::Result;
use crate::lint::LintReport;
use crate::report::Reporter;
use std::io::Write;

/// Human-readable console output reporter
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report_clean(&self, report: &CleanReport, writer: &mut dyn Write) -> Result<()> {
        let verb = if report.dry_run { "Would remove" } else { "Removed" };
        for path in &report.removed {
            writeln!(writer, "{} {}", verb, path.display())?;
        }
        for failure in &report.failures {
            writeln!(writer, "FAILED {}: {}", failure.path.display(), failure.reason)?;
        }

        if report.removed.is_empty() && report.failures.is_empty() {
            writeln!(
                writer,
                "No cache directories found under {}",
                report.root.display()
            )?;
        } else {
            writeln!(
                writer,
                "{} {} cache director{}, {} failure{}",
                verb,
                report.removed.len(),
                if report.removed.len() == 1 { "y" } else { "ies" },
                report.failures.len(),
                if report.failures.len() == 1 { "" } else { "s" },
            )?;
        }
        Ok(())
    }

    fn report_lint(&self, report: &LintReport, writer: &mut dyn Write) -> Result<()> {
        for step in &report.steps {
            let status = match step.exit_code {
                _ if step.success() => "ok".to_string(),
                Some(code) => format!("exit {}", code),
                None => "killed by signal".to_string(),
            };
            writeln!(writer, "{:<6} {} ({})", step.step, step.command.join(" "), status)?;
        }
        writeln!(
            writer,
            "Lint {}",
            if report.is_success() { "passed" } else { "failed" }
        )?;
        Ok(())
    }
}
