//! JSON reporter

use crate::clean::CleanReport;
use crate::error::Result;
use crate::lint::LintReport;
use crate::report::Reporter;
use serde::Serialize;
use std::io::Write;

/// JSON output reporter
pub struct JsonReporter;

#[derive(Serialize)]
struct JsonClean<'a> {
    command: &'static str,
    success: bool,
    #[serde(flatten)]
    report: &'a CleanReport,
}

#[derive(Serialize)]
struct JsonLint<'a> {
    command: &'static str,
    success: bool,
    exit_code: i32,
    #[serde(flatten)]
    report: &'a LintReport,
}

fn write_json<T: Serialize>(value: &T, writer: &mut dyn Write) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

impl Reporter for JsonReporter {
    fn report_clean(&self, report: &CleanReport, writer: &mut dyn Write) -> Result<()> {
        write_json(
            &JsonClean {
                command: "clean",
                success: report.is_success(),
                report,
            },
            writer,
        )
    }

    fn report_lint(&self, report: &LintReport, writer: &mut dyn Write) -> Result<()> {
        write_json(
            &JsonLint {
                command: "lint",
                success: report.is_success(),
                exit_code: report.exit_code(),
                report,
            },
            writer,
        )
    }
}
