//! File conversion: a whole text file to CSV content

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::error::{ConvertError, Result};
use super::row::format_row;

// `\r\n`, a lone `\r` (classic Mac) or `\n` each end a line
static LINE_ENDING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?|\n").unwrap());

/// Converted content of one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    /// Concatenated CSV rows, one per input line
    pub content: String,
    /// Number of rows produced (equal to the number of input lines)
    pub rows: usize,
}

/// Read `path` and format every line as a CSV row.
///
/// Line order is preserved. A file that cannot be opened or is not valid
/// UTF-8 yields [`ConvertError::Read`].
pub fn convert_file(path: &Path) -> Result<ConvertedFile> {
    let text = fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut content = String::with_capacity(text.len() + 1);
    let mut rows = 0;
    for line in split_lines(&text) {
        content.push_str(&format_row(line));
        rows += 1;
    }

    debug!(path = %path.display(), rows, "converted file");
    Ok(ConvertedFile { content, rows })
}

/// Split `text` into lines without their terminators.
///
/// A final line without a terminator still counts; an empty text has no lines.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    for ending in LINE_ENDING.find_iter(text) {
        lines.push(&text[start..ending.start()]);
        start = ending.end();
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
