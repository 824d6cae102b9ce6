//! Cache directory discovery and removal

use crate::config::Config;
use crate::error::{Result, TaskError};
use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A directory that could not be walked or removed
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CleanFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a clean pass
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    /// Traversal root
    pub root: PathBuf,
    /// True when nothing was deleted and `removed` lists candidates only
    pub dry_run: bool,
    /// Cache directories removed (or that would be removed in dry-run mode)
    pub removed: Vec<PathBuf>,
    /// Directories that could not be walked or removed
    pub failures: Vec<CleanFailure>,
}

impl CleanReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

fn is_marker(name: &OsStr, markers: &[String]) -> bool {
    markers.iter().any(|m| OsStr::new(m) == name)
}

/// Collect every cache directory beneath `root`.
///
/// A matched directory is not descended into: nested matches go with their
/// parent. Symlinks are neither followed nor matched. Unreadable entries below
/// the root are pushed onto `failures`; an unusable root is an error.
pub fn find_cache_dirs(
    root: &Path,
    markers: &[String],
    failures: &mut Vec<CleanFailure>,
) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(TaskError::RootNotFound(root.to_path_buf()));
    }

    let mut found = Vec::new();
    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(next) = walker.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(TaskError::Walk {
                    path: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                warn!(path = %path.display(), err = %err, "cannot walk entry");
                failures.push(CleanFailure {
                    path,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        if entry.depth() > 0
            && entry.file_type().is_dir()
            && is_marker(entry.file_name(), markers)
        {
            walker.skip_current_dir();
            debug!(path = %entry.path().display(), "found cache directory");
            found.push(entry.into_path());
        }
    }

    Ok(found)
}

/// Remove a directory tree. Returns false if it was already gone.
fn remove_cache_dir(path: &Path) -> io::Result<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Remove every cache directory under the configured root.
///
/// Removal failures are recorded and the pass continues with the next
/// directory; callers decide how to surface them.
pub fn clean(config: &Config) -> Result<CleanReport> {
    let root = config.root.as_path();
    let markers = &config.clean.markers;
    info!(root = %root.display(), markers = ?markers, dry_run = config.clean.dry_run, "cleaning");

    let mut failures = Vec::new();
    let candidates = find_cache_dirs(root, markers, &mut failures)?;

    if config.clean.dry_run {
        return Ok(CleanReport {
            root: root.to_path_buf(),
            dry_run: true,
            removed: candidates,
            failures,
        });
    }

    let mut removed = Vec::with_capacity(candidates.len());
    for path in candidates {
        match remove_cache_dir(&path) {
            Ok(true) => {
                info!(path = %path.display(), "removed");
                removed.push(path);
            }
            Ok(false) => debug!(path = %path.display(), "already gone"),
            Err(e) => {
                warn!(path = %path.display(), err = %e, "failed to remove");
                failures.push(CleanFailure {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(CleanReport {
        root: root.to_path_buf(),
        dry_run: false,
        removed,
        failures,
    })
}
