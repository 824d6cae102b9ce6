//! devtasks - Developer workflow tasks for a source tree
//!
//! `devtasks clean` removes cache directories anywhere under the project
//! root. `devtasks lint` runs an auto-fix pass and then a format pass with
//! external tools (ruff by default).

mod clean;
mod cli;
mod config;
mod error;
mod exit_codes;
mod lint;
mod logging;
mod report;

use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use error::Result;
use report::{create_reporter, Reporter};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let is_lint = matches!(cli.command, Command::Lint(_));
    let config = match cli.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_codes::USAGE);
        }
    };

    let reporter = create_reporter(config.output_format);
    let outcome = if is_lint {
        run_lint(&config, reporter.as_ref())
    } else {
        run_clean(&config, reporter.as_ref())
    };

    match outcome {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_codes::for_error(&e))
        }
    }
}

fn run_clean(config: &Config, reporter: &dyn Reporter) -> Result<u8> {
    let report = clean::clean(config)?;

    let mut out = io::stdout().lock();
    reporter.report_clean(&report, &mut out)?;
    out.flush()?;

    Ok(if report.is_success() {
        exit_codes::OK
    } else {
        exit_codes::FAILURE
    })
}

fn run_lint(config: &Config, reporter: &dyn Reporter) -> Result<u8> {
    let report = lint::lint(config)?;

    let mut out = io::stdout().lock();
    reporter.report_lint(&report, &mut out)?;
    out.flush()?;

    Ok(exit_codes::from_tool_code(report.exit_code()))
}
