//! Interactive column-name prompts

use anyhow::Result;
use console::style;
use tracing::debug;

use super::console::Console;
use crate::pipeline::{ColumnPrompt, STOP_WORD};
use crate::utils::print_error;

/// Asks for column names through a [`Console`]
pub struct ConsolePrompt<'a, C: Console + ?Sized> {
    console: &'a mut C,
}

impl<'a, C: Console + ?Sized> ConsolePrompt<'a, C> {
    pub fn new(console: &'a mut C) -> Self {
        Self { console }
    }
}

impl<C: Console + ?Sized> ColumnPrompt for ConsolePrompt<'_, C> {
    fn begin(&mut self) {
        println!();
        println!("{}", style("Column Settings:").bold());
        println!();
        println!("Type {} to stop adding columns", style(STOP_WORD).yellow());
        println!();
    }

    fn ask(&mut self, index: usize) -> Result<Option<String>> {
        self.console
            .read_line(&format!("Enter column {} name", index))
    }

    fn reject(&mut self, index: usize, name: &str) {
        debug!(index, name, "rejected column name");
        print_error("Invalid column name");
    }
}
