//! Configuration types for devtasks

use crate::error::{Result, TaskError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the project root when `--config` is not given
pub const CONFIG_FILENAME: &str = "devtasks.toml";

/// Output format for command reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable console output
    #[default]
    Console,
    /// JSON output with structured data
    Json,
}

/// One external tool invocation: the executable and its fixed arguments.
/// Target paths are appended after `args` at run time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolCommand {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Settings for `devtasks clean`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanConfig {
    /// Directory names treated as cache directories (default: `__pycache__`)
    pub markers: Vec<String>,

    /// Report what would be removed without deleting anything
    pub dry_run: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            markers: vec!["__pycache__".to_string()],
            dry_run: false,
        }
    }
}

/// Settings for `devtasks lint`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Auto-fix pass, run first
    pub fix: ToolCommand,

    /// Format pass, run after the fix pass has exited
    pub format: ToolCommand,

    /// Paths handed to both tools, relative to the project root
    pub targets: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            fix: ToolCommand::new("ruff", &["check", "--fix"]),
            format: ToolCommand::new("ruff", &["format"]),
            targets: vec![".".to_string()],
        }
    }
}

/// On-disk layout of `devtasks.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub clean: CleanConfig,
    pub lint: LintConfig,
}

/// Resolved configuration for a single run
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root: traversal root for `clean`, working directory for `lint`
    pub root: PathBuf,

    /// Output format (console or json)
    pub output_format: OutputFormat,

    pub clean: CleanConfig,

    pub lint: LintConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_format: OutputFormat::Console,
            clean: CleanConfig::default(),
            lint: LintConfig::default(),
        }
    }
}

impl Config {
    /// Build a config from a root and the file settings found for it
    pub fn from_file_config(root: PathBuf, file: FileConfig) -> Self {
        Self {
            root,
            output_format: OutputFormat::Console,
            clean: file.clean,
            lint: file.lint,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.clean.markers.is_empty() {
            return Err(TaskError::InvalidConfig(
                "clean.markers must name at least one directory".to_string(),
            ));
        }
        for marker in &self.clean.markers {
            if !is_plain_name(marker) {
                return Err(TaskError::InvalidConfig(format!(
                    "clean marker '{}' must be a plain directory name",
                    marker
                )));
            }
        }
        for (step, tool) in [("fix", &self.lint.fix), ("format", &self.lint.format)] {
            if tool.program.trim().is_empty() {
                return Err(TaskError::InvalidConfig(format!(
                    "lint.{}.program must not be empty",
                    step
                )));
            }
        }
        if self.lint.targets.is_empty() {
            return Err(TaskError::InvalidConfig(
                "lint.targets must contain at least one path".to_string(),
            ));
        }
        Ok(())
    }
}

/// A marker must match a single path component, never a path or `.`/`..`
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

/// Load settings from a TOML file.
///
/// When `required` is false a missing file yields the defaults.
pub fn load_file_config(path: &Path, required: bool) -> Result<FileConfig> {
    if !path.exists() {
        if required {
            return Err(TaskError::ConfigParse {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        }
        return Ok(FileConfig::default());
    }

    let text = fs::read_to_string(path).map_err(|e| TaskError::ConfigParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    toml::from_str(&text).map_err(|e| TaskError::ConfigParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_target_pycache_and_ruff() {
        let config = Config::default();
        assert_eq!(config.clean.markers, vec!["__pycache__".to_string()]);
        assert_eq!(config.lint.fix, ToolCommand::new("ruff", &["check", "--fix"]));
        assert_eq!(config.lint.format, ToolCommand::new("ruff", &["format"]));
        assert_eq!(config.lint.targets, vec![".".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_optional_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let file = load_file_config(&temp.path().join(CONFIG_FILENAME), false).unwrap();
        assert_eq!(file, FileConfig::default());
    }

    #[test]
    fn test_missing_required_file_is_error() {
        let temp = TempDir::new().unwrap();
        let result = load_file_config(&temp.path().join("nope.toml"), true);
        assert!(matches!(result, Err(TaskError::ConfigParse { .. })));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "[clean]\nmarkers = [\"__pycache__\", \".mypy_cache\"]\n\n\
             [lint.format]\nprogram = \"black\"\n",
        )
        .unwrap();

        let file = load_file_config(&path, true).unwrap();
        assert_eq!(file.clean.markers, vec!["__pycache__", ".mypy_cache"]);
        assert!(!file.clean.dry_run);
        assert_eq!(file.lint.format, ToolCommand::new("black", &[]));
        assert_eq!(file.lint.fix, LintConfig::default().fix);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        fs::write(&path, "[clean]\nmarker = \"typo\"\n").unwrap();

        let result = load_file_config(&path, false);
        assert!(matches!(result, Err(TaskError::ConfigParse { .. })));
    }

    #[test]
    fn test_validate_rejects_path_like_marker() {
        for bad in ["", ".", "..", "a/b", "a\\b"] {
            let mut config = Config::default();
            config.clean.markers = vec![bad.to_string()];
            assert!(
                matches!(config.validate(), Err(TaskError::InvalidConfig(_))),
                "marker {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_rejects_empty_markers() {
        let mut config = Config::default();
        config.clean.markers.clear();
        assert!(matches!(config.validate(), Err(TaskError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_blank_program() {
        let mut config = Config::default();
        config.lint.format.program = "  ".to_string();
        assert!(matches!(config.validate(), Err(TaskError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_empty_targets() {
        let mut config = Config::default();
        config.lint.targets.clear();
        assert!(matches!(config.validate(), Err(TaskError::InvalidConfig(_))));
    }
}
