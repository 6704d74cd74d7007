//! Row formatting: one line of whitespace-delimited text to one CSV row

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Format a single line as a CSV row.
///
/// Leading and trailing whitespace (including any line terminator) is removed,
/// every remaining run of whitespace becomes a single comma, and exactly one
/// `\n` is appended. Blank lines yield `"\n"`.
///
/// Commas already present in the text are not escaped, so they cannot be told
/// apart from delimiters in the output.
pub fn format_row(line: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(line.trim(), ",");
    let mut row = String::with_capacity(collapsed.len() + 1);
    row.push_str(&collapsed);
    row.push('\n');
    row
}
