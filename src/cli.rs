//! CLI argument parsing using clap

use crate::config::{load_file_config, Config, OutputFormat, CONFIG_FILENAME};
use crate::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Developer workflow tasks for a source tree
#[derive(Parser, Debug)]
#[command(name = "devtasks")]
#[command(version)]
#[command(about = "Clean cache directories and run lint/format passes", long_about = None)]
pub struct Cli {
    /// Project root (traversal root for clean, working directory for lint)
    #[arg(long = "root", value_name = "DIR", default_value = ".", global = true)]
    pub root: PathBuf,

    /// Config file (default: devtasks.toml in the project root, if present)
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output the report in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove every cache directory under the project root
    Clean(CleanArgs),
    /// Run the auto-fix pass, then the format pass
    Lint(LintArgs),
}

#[derive(Args, Debug, Default)]
pub struct CleanArgs {
    /// Cache directory name to remove (repeatable; replaces configured markers)
    #[arg(short = 'm', long = "marker", value_name = "NAME")]
    pub markers: Vec<String>,

    /// List matching directories without deleting them
    #[arg(short = 'n', long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args, Debug, Default)]
pub struct LintArgs {
    /// Paths to lint and format, relative to the project root (default: .)
    #[arg(value_name = "TARGETS")]
    pub targets: Vec<String>,
}

impl Cli {
    /// Resolve defaults, the config file and command line overrides into a Config
    pub fn into_config(self) -> Result<Config> {
        let (path, required) = match self.config {
            Some(path) => (path, true),
            None => (self.root.join(CONFIG_FILENAME), false),
        };
        let file = load_file_config(&path, required)?;

        let mut config = Config::from_file_config(self.root, file);
        if self.json {
            config.output_format = OutputFormat::Json;
        }

        match self.command {
            Command::Clean(args) => {
                if !args.markers.is_empty() {
                    config.clean.markers = args.markers;
                }
                if args.dry_run {
                    config.clean.dry_run = true;
                }
            }
            Command::Lint(args) => {
                if !args.targets.is_empty() {
                    config.lint.targets = args.targets;
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}
