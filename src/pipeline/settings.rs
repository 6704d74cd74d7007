//! Run configuration shared by the batch processor and the shell

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::{ConvertError, Result};
use super::scanner::TEXT_EXTENSION;

/// Default input directory, relative to the working directory
pub const DEFAULT_INPUT_DIR: &str = "./input";

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// What to do when an input file cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the batch at the first unreadable file
    #[default]
    Abort,
    /// Record the failure, skip the file and keep going
    Skip,
}

/// Directories and policies for a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Suffix that marks a convertible input file
    pub extension: String,
    pub failure_policy: FailurePolicy,
}

impl Settings {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            extension: TEXT_EXTENSION.to_string(),
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn input_path(&self, name: &str) -> PathBuf {
        self.input_dir.join(name)
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }

    /// Create the input and output directories if they are missing.
    ///
    /// A path that exists but is not a directory is an error too.
    pub fn ensure_directories(&self) -> Result<()> {
        ensure_dir_exists("input", &self.input_dir)?;
        ensure_dir_exists("output", &self.output_dir)
    }
}

fn ensure_dir_exists(role: &'static str, path: &Path) -> Result<()> {
    let setup_error = |source| ConvertError::Setup {
        role,
        path: path.to_path_buf(),
        source,
    };

    if !path.exists() {
        fs::create_dir_all(path).map_err(setup_error)?;
        info!(role, path = %path.display(), "created directory");
    } else if !path.is_dir() {
        return Err(setup_error(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "path exists but is not a directory",
        )));
    } else {
        debug!(role, path = %path.display(), "directory already exists");
    }
    Ok(())
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR)
    }
}
