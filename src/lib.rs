//! Mass Text to CSV: Conversion Library
//!
//! Converts whitespace-delimited text files into CSV files, with an
//! interactive menu and optional user-supplied column headers.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
