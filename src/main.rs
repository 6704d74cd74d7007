//! Mass Text to CSV: CLI Tool
//!
//! Converts every `.txt` file in the input folder into a `.csv` file in the
//! output folder, either from an interactive menu or in one shot.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use masscsv::cli::{run_convert, Cli, Commands, Shell, TerminalConsole};
use masscsv::utils::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "parsed CLI arguments");

    let settings = cli.settings();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Convert { headers } => run_convert(&settings, headers),
        };
    }

    Shell::new(&settings, TerminalConsole::new()).run()
}
