//! Terminal styling utilities for the console menu and batch output

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static CROSS: Emoji<'_, '_> = Emoji("✗ ", "x ");

/// Name shown in the welcome banner
pub const PROGRAM_NAME: &str = "Mass Text to CSV";

/// Print the welcome line and the numbered menu
pub fn print_menu() {
    let welcome = format!("Welcome to {}", PROGRAM_NAME);
    println!();
    println!("{}", style(format!("{:^40}", welcome)).blue().bold());
    println!();
    print_menu_option(1, "Convert all files in the input folder");
    print_menu_option(2, "Convert all files in the input folder and add column names");
    print_menu_option(3, "Exit");
    println!();
}

fn print_menu_option(number: u8, label: &str) {
    println!(
        "{} {}",
        style(format!("[{}]:", number)).magenta(),
        style(label).cyan()
    );
}

/// Print the resolved input and output folders
pub fn print_folders(input: &Path, output: &Path) {
    println!(
        "    {} Input:  {}",
        FOLDER,
        style(truncate_path(input, 40)).dim()
    );
    println!(
        "    {} Output: {}",
        SAVE,
        style(truncate_path(output, 40)).dim()
    );
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print an error message surrounded by blank lines
pub fn print_error(message: &str) {
    println!();
    println!("{}{}", CROSS, style(message).red());
    println!();
}

/// Print the notice for an empty input folder
pub fn print_no_files() {
    print_error("No files found in the input folder");
}

/// Print the notice for a non-numeric menu choice
pub fn print_numeric_hint() {
    print_error("Please type in a numeric value for the menu option.");
}

/// Announce that a file is being converted
pub fn print_file_start(name: &str) {
    println!();
    println!("{} {}", style("Processing file:").green(), name);
}

/// Announce that an output file was written
pub fn print_file_done(name: &str) {
    println!("{} {}", style("Processed:").green(), name);
}

/// Report an entry of the output folder that could not be deleted
pub fn print_erase_failure(path: &Path) {
    println!(
        "{} {}",
        style("Failed to delete file:").red(),
        path.display()
    );
}

/// Print the farewell message
pub fn print_exit() {
    println!();
    println!("{}", style("Exiting...").green());
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(count - max_len + 3).collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate_string("./input", 40), "./input");
    }

    #[test]
    fn test_truncate_keeps_tail() {
        let truncated = truncate_string("/very/long/path/to/output", 10);
        assert_eq!(truncated, ".../output");
        assert_eq!(truncated.chars().count(), 10);
    }
}
