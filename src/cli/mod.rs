//! CLI module - argument parsing, console input and the interactive menu

pub mod args;
pub mod console;
pub mod convert;
pub mod menu;
pub mod prompts;
pub mod shell;

pub use args::{Cli, Commands};
pub use console::{Console, TerminalConsole};
pub use convert::run_convert;
pub use menu::{MenuCommand, MenuParseError};
pub use prompts::ConsolePrompt;
pub use shell::{present_outcome, CommandOutcome, Shell, ShellState};
