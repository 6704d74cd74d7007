//! Best-effort recursive directory clearing
//!
//! The output directory is wiped before each batch. A failure to remove one
//! entry (typically a permission error) must not stop the rest of the erase,
//! so failures are collected into an [`EraseReport`] instead of being returned
//! as an error. Only a missing or unreadable root is a hard error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::error::{ConvertError, Result};

/// A single entry that could not be removed
#[derive(Debug)]
pub struct EraseFailure {
    pub path: PathBuf,
    pub error: io::Error,
}

impl EraseFailure {
    /// Whether the failure was caused by missing permissions
    pub fn is_permission_denied(&self) -> bool {
        self.error.kind() == io::ErrorKind::PermissionDenied
    }
}

/// Outcome of erasing a directory tree
#[derive(Debug, Default)]
pub struct EraseReport {
    /// Number of files and directories removed
    pub removed: usize,
    /// Entries that could not be removed, in visit order
    pub failures: Vec<EraseFailure>,
}

impl EraseReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, path: &Path, error: io::Error) {
        warn!(path = %path.display(), %error, "failed to delete entry");
        self.failures.push(EraseFailure {
            path: path.to_path_buf(),
            error,
        });
    }
}

/// Delete everything inside `dir`, and `dir` itself when `remove_root` is set.
///
/// Entries are visited depth-first with contents before their directory, so a
/// subdirectory is removed only after its children. Symlinks are removed, not
/// followed.
pub fn erase_directory(dir: &Path, remove_root: bool) -> Result<EraseReport> {
    // Surface a missing root as NotFound rather than as a per-entry failure
    fs::read_dir(dir).map_err(|e| ConvertError::from_dir_io(dir, e))?;

    let mut report = EraseReport::default();

    for entry in WalkDir::new(dir).min_depth(1).contents_first(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                let error = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "filesystem loop"));
                report.record(&path, error);
                continue;
            }
        };

        let path = entry.path();
        let removal = if entry.file_type().is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        };

        match removal {
            Ok(()) => {
                debug!(path = %path.display(), "deleted");
                report.removed += 1;
            }
            Err(error) => report.record(path, error),
        }
    }

    if remove_root {
        match fs::remove_dir(dir) {
            Ok(()) => report.removed += 1,
            Err(error) => report.record(dir, error),
        }
    }

    Ok(report)
}
