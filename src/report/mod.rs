//! Report rendering for command outcomes

mod console;
mod json;

use crate::clean::CleanReport;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::lint::LintReport;
use std::io::Write;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Trait for output formatting
pub trait Reporter {
    /// Write the outcome of a clean pass
    fn report_clean(&self, report: &CleanReport, writer: &mut dyn Write) -> Result<()>;

    /// Write the outcome of a lint run
    fn report_lint(&self, report: &LintReport, writer: &mut dyn Write) -> Result<()>;
}

/// Create an appropriate reporter based on configuration
pub fn create_reporter(format: OutputFormat) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleReporter),
        OutputFormat::Json => Box::new(JsonReporter),
    }
}
