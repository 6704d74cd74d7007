//! Batch summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::EraseReport;

/// One input file that was converted and written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedEntry {
    pub input: String,
    pub output: String,
    pub rows: usize,
}

/// One input file left out because it could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub input: String,
    pub reason: String,
}

/// Summary of a single batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertedEntry>,
    pub skipped: Vec<SkippedEntry>,
    /// Result of clearing the previous output
    pub erase: EraseReport,
    /// Header line written to every output file, if headers were requested
    pub header: Option<String>,
}

impl BatchReport {
    pub fn new(erase: EraseReport, header: Option<String>) -> Self {
        Self {
            erase,
            header,
            ..Default::default()
        }
    }

    pub fn add_converted(&mut self, input: &str, output: &str, rows: usize) {
        self.converted.push(ConvertedEntry {
            input: input.to_string(),
            output: output.to_string(),
            rows,
        });
    }

    pub fn add_skipped(&mut self, input: &str, reason: impl ToString) {
        self.skipped.push(SkippedEntry {
            input: input.to_string(),
            reason: reason.to_string(),
        });
    }

    pub fn total_rows(&self) -> usize {
        self.converted.iter().map(|e| e.rows).sum()
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("BATCH SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📄 Files Converted"),
            Cell::new(self.converted.len()).fg(Color::Green),
        ]);

        table.add_row(vec![
            Cell::new("📏 Rows Written"),
            Cell::new(self.total_rows()),
        ]);

        table.add_row(vec![
            Cell::new("⏭️  Files Skipped"),
            Cell::new(self.skipped.len()).fg(if self.skipped.is_empty() {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("🗑️  Old Outputs Removed"),
            Cell::new(self.erase.removed),
        ]);

        if !self.erase.is_clean() {
            table.add_row(vec![
                Cell::new("⚠️  Delete Failures"),
                Cell::new(self.erase.failures.len()).fg(Color::Red),
            ]);
        }

        if let Some(header) = &self.header {
            table.add_row(vec![
                Cell::new("🏷️  Header"),
                Cell::new(if header.is_empty() { "(empty)" } else { header.as_str() }),
            ]);
        }

        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        // Show skipped file details if any
        if !self.skipped.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Unreadable Files").yellow(),
                style(format!("({})", self.skipped.len())).dim()
            );
            for entry in &self.skipped {
                println!(
                    "        {} {} {}",
                    style("•").dim(),
                    entry.input,
                    style(&entry.reason).dim()
                );
            }
        }
        println!();
    }
}
