//! Interactive menu shell
//!
//! The shell moves through three states:
//!
//! - `Init`: make sure the input and output folders exist. Failure is fatal.
//! - `MenuLoop`: show the menu, read a choice, run it, repeat.
//! - `Exit`: say goodbye and return.
//!
//! [`Shell::execute`] is the command interface: it takes an already parsed
//! [`MenuCommand`] and returns what happened. [`Shell::run`] is the thin
//! console adapter that reads lines, parses them and prints outcomes.

use anyhow::Result;
use tracing::{error, info};

use super::console::Console;
use super::menu::MenuCommand;
use super::prompts::ConsolePrompt;
use crate::pipeline::{BatchOutcome, BatchProcessor, HeaderMode, Settings};
use crate::utils::{
    print_error, print_exit, print_folders, print_menu, print_no_files, print_numeric_hint,
    print_success,
};

/// Lifecycle state of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Init,
    MenuLoop,
    Exit,
}

/// What a single menu command did
#[derive(Debug)]
pub enum CommandOutcome {
    /// A batch ran to completion (possibly finding no input)
    Batch(BatchOutcome),
    /// The number did not match any menu entry
    Ignored,
    /// The shell is leaving the menu loop
    Exit,
}

pub struct Shell<'a, C: Console> {
    settings: &'a Settings,
    console: C,
    state: ShellState,
}

impl<'a, C: Console> Shell<'a, C> {
    pub fn new(settings: &'a Settings, console: C) -> Self {
        Self {
            settings,
            console,
            state: ShellState::Init,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Create missing folders and enter the menu loop
    pub fn init(&mut self) -> Result<()> {
        self.settings.ensure_directories()?;
        self.state = ShellState::MenuLoop;
        Ok(())
    }

    /// Run one menu command
    pub fn execute(&mut self, command: MenuCommand) -> Result<CommandOutcome> {
        let outcome = match command {
            MenuCommand::Convert => {
                let batch = BatchProcessor::new(self.settings);
                CommandOutcome::Batch(batch.run(HeaderMode::None)?)
            }
            MenuCommand::ConvertWithHeaders => {
                let mut prompt = ConsolePrompt::new(&mut self.console);
                let batch = BatchProcessor::new(self.settings);
                CommandOutcome::Batch(batch.run(HeaderMode::Prompt(&mut prompt))?)
            }
            MenuCommand::Exit => {
                self.state = ShellState::Exit;
                CommandOutcome::Exit
            }
            MenuCommand::Unknown(_) => CommandOutcome::Ignored,
        };
        Ok(outcome)
    }

    /// Drive the menu from the console until the user exits or input ends.
    ///
    /// Only a failure to prepare the folders or to read the console is
    /// returned; batch errors are reported and the menu is shown again.
    pub fn run(&mut self) -> Result<()> {
        if let Err(err) = self.init() {
            print_error(&format!("{:#}", err));
            return Err(err);
        }
        print_folders(&self.settings.input_dir, &self.settings.output_dir);

        while self.state == ShellState::MenuLoop {
            print_menu();
            let Some(line) = self.console.read_line("Enter your choice")? else {
                info!("console input closed");
                self.state = ShellState::Exit;
                break;
            };

            let command = match line.parse::<MenuCommand>() {
                Ok(command) => command,
                Err(_) => {
                    print_numeric_hint();
                    continue;
                }
            };

            match self.execute(command) {
                Ok(outcome) => present_outcome(&outcome),
                Err(err) => {
                    error!(error = %format!("{:#}", err), "batch failed");
                    print_error(&format!("{:#}", err));
                }
            }
        }

        print_exit();
        Ok(())
    }
}

/// Print the user-facing result of a command
pub fn present_outcome(outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Batch(BatchOutcome::NoInputFiles) => print_no_files(),
        CommandOutcome::Batch(BatchOutcome::Completed(report)) => {
            report.display();
            print_success(&format!("Converted {} file(s)", report.converted.len()));
        }
        CommandOutcome::Ignored | CommandOutcome::Exit => {}
    }
}
