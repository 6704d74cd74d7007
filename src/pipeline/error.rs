//! Error types for the text-to-CSV pipeline.
//!
//! Each variant captures one failure mode of scanning, converting, writing or
//! preparing directories. Application-level flow wraps these in
//! `anyhow::Error` with extra context where useful.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a batch of text files.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A directory that must exist is missing.
    #[error("Directory not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// An input file could not be opened or is not valid UTF-8.
    ///
    /// Under the default failure policy this aborts the whole batch.
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file could not be created or written.
    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input or output directory could not be created at startup.
    #[error("Failed to create {role} folder {}", path.display())]
    Setup {
        role: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A column name did not match the allowed pattern.
    #[error("Invalid column name '{0}': use at least 2 letters, digits or dashes")]
    InvalidHeader(String),

    /// Any other I/O failure against a directory.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    /// Map an I/O error on `path` to `NotFound` when applicable, otherwise `Io`.
    pub fn from_dir_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            ConvertError::NotFound { path }
        } else {
            ConvertError::Io { path, source }
        }
    }

    /// True when this error is a read failure of a single input file.
    pub fn is_read_error(&self) -> bool {
        matches!(self, ConvertError::Read { .. })
    }
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
