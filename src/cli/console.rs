//! Line-oriented console input
//!
//! The shell and the header prompts only ever need "show a prompt, read one
//! line". [`Console`] captures that so the menu logic can be driven by a
//! script in tests and by stdin when piped.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use console::style;
use dialoguer::Input;

/// Source of user input lines
pub trait Console {
    /// Show `prompt` and read one line without its terminator.
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

/// Console backed by the process terminal
///
/// Uses dialoguer when stdin is a terminal, and plain line reads otherwise.
pub struct TerminalConsole {
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    fn read_piped(&self, prompt: &str) -> Result<Option<String>> {
        print!("{}: ", style(prompt).green());
        io::stdout().flush().ok();

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(strip_line_ending(&line).to_string()))
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if !self.interactive {
            return self.read_piped(prompt);
        }

        let line: String = Input::new()
            .with_prompt(style(prompt).green().to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(line))
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
