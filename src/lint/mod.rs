//! Lint and format passes
//!
//! Runs the configured auto-fix tool, then the formatter, over the project
//! tree. Both are external executables; this module only sequences them and
//! collects their exit status.

mod passes;
mod tool;

pub use passes::{lint, LintReport};
#[cfg(test)]
pub use tool::{Step, StepOutcome};
