//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::{
    is_valid_column_name, FailurePolicy, Settings, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR,
};

/// Mass Text to CSV - convert whitespace-delimited text files into CSV files
#[derive(Parser, Debug)]
#[command(name = "masscsv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Folder scanned for .txt files (created if missing)
    #[arg(
        short,
        long,
        env = "MASSCSV_INPUT_DIR",
        default_value = DEFAULT_INPUT_DIR,
        global = true
    )]
    pub input_dir: PathBuf,

    /// Folder receiving the .csv files. Its contents are deleted before each batch.
    #[arg(
        short,
        long,
        env = "MASSCSV_OUTPUT_DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        global = true
    )]
    pub output_dir: PathBuf,

    /// Skip input files that cannot be read as UTF-8 instead of aborting the batch
    #[arg(long, default_value = "false", global = true)]
    pub skip_unreadable: bool,

    /// Increase diagnostic logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert all input files once without showing the menu
    Convert {
        /// Column name for the header line. Repeat for several columns.
        #[arg(long = "header", value_parser = parse_column_name)]
        headers: Vec<String>,
    },
}

impl Cli {
    /// Build the run settings from the parsed arguments
    pub fn settings(&self) -> Settings {
        let policy = if self.skip_unreadable {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        };
        Settings::new(&self.input_dir, &self.output_dir).with_failure_policy(policy)
    }
}

/// Validator for --header values
fn parse_column_name(s: &str) -> Result<String, String> {
    if is_valid_column_name(s) {
        Ok(s.to_string())
    } else {
        Err(format!(
            "'{}' is not a valid column name (at least 2 letters, digits or dashes)",
            s
        ))
    }
}
