//! Stable exit codes for devtasks commands.
//!
//! `lint` passes the external tools' own status through; these are the codes
//! devtasks produces itself.

use crate::error::TaskError;

/// Command succeeded.
pub const OK: u8 = 0;
/// `clean` could not remove (or walk) at least one directory.
pub const FAILURE: u8 = 1;
/// Bad configuration, arguments or project root.
pub const USAGE: u8 = 2;
/// An external tool could not be launched (missing executable, not permitted).
pub const TOOL_LAUNCH: u8 = 127;

/// Exit code for an error that stopped a command
pub fn for_error(err: &TaskError) -> u8 {
    match err {
        TaskError::ToolLaunch { .. } => TOOL_LAUNCH,
        TaskError::RootNotFound(_)
        | TaskError::Walk { .. }
        | TaskError::InvalidConfig(_)
        | TaskError::ConfigParse { .. } => USAGE,
        TaskError::Io(_) | TaskError::Json(_) => FAILURE,
    }
}

/// Clamp a tool's exit code into a process exit code without turning a
/// failure into success.
pub fn from_tool_code(code: i32) -> u8 {
    match code {
        0 => OK,
        1..=255 => code as u8,
        _ => FAILURE,
    }
}
