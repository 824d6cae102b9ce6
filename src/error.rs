//! Error types for devtasks

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for devtasks operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Error types for devtasks operations
#[derive(Error, Debug)]
pub enum TaskError {
    /// Project root is missing or not a directory
    #[error("Project root '{}' does not exist or is not a directory", .0.display())]
    RootNotFound(PathBuf),

    /// Directory traversal failed at the root itself
    #[error("Cannot walk '{}': {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be read or parsed
    #[error("Cannot load config '{}': {reason}", path.display())]
    ConfigParse { path: PathBuf, reason: String },

    /// External tool could not be started at all
    #[error(
        "Failed to launch '{program}': {source}\n\
         Install it, or point [lint.fix] / [lint.format] in devtasks.toml at another executable."
    )]
    ToolLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error during report output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON report serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
