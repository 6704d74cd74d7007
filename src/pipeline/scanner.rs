//! Directory scanning for input files

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::{ConvertError, Result};

/// Default extension of convertible input files
pub const TEXT_EXTENSION: &str = ".txt";

/// Extension given to converted output files
pub const CSV_EXTENSION: &str = ".csv";

/// List the names of regular files directly inside `dir` ending with `extension`.
///
/// The suffix match is exact and case-sensitive. Subdirectories are never
/// entered, and the result keeps directory-listing order.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| ConvertError::from_dir_io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConvertError::from_dir_io(dir, e))?;

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            debug!(entry = ?entry.file_name(), "skipping non UTF-8 file name");
            continue;
        };
        if !name.ends_with(extension) {
            continue;
        }

        // Follows symlinks so a link to a regular file still counts
        let is_file = fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            debug!(name = %name, "skipping non-file entry");
            continue;
        }

        names.push(name);
    }

    debug!(dir = %dir.display(), count = names.len(), "scanned input directory");
    Ok(names)
}

/// Derive the output file name by replacing the trailing `extension` with `.csv`.
///
/// Names that do not end with `extension` just get `.csv` appended.
pub fn output_file_name(input_name: &str, extension: &str) -> String {
    let stem = input_name.strip_suffix(extension).unwrap_or(input_name);
    format!("{}{}", stem, CSV_EXTENSION)
}
