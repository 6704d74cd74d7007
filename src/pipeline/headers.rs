//! Column header validation and interactive collection

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ConvertError;

static COLUMN_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{2,}$").unwrap());

/// Literal input that ends header collection
pub const STOP_WORD: &str = "exit";

/// Check a column name: at least two ASCII letters, digits or dashes
pub fn is_valid_column_name(name: &str) -> bool {
    COLUMN_NAME.is_match(name)
}

/// Ordered list of validated column names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList {
    names: Vec<String>,
}

impl HeaderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from names that must all be valid
    pub fn from_names<I, S>(names: I) -> Result<Self, ConvertError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for name in names {
            list.push(name.into())?;
        }
        Ok(list)
    }

    /// Append a name, rejecting it if it does not validate
    pub fn push(&mut self, name: String) -> Result<(), ConvertError> {
        if !is_valid_column_name(&name) {
            return Err(ConvertError::InvalidHeader(name));
        }
        self.names.push(name);
        Ok(())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Comma-joined header line, without a trailing newline
    pub fn line(&self) -> String {
        self.names.join(",")
    }
}

/// Source of column names during interactive collection
pub trait ColumnPrompt {
    /// Called once before the first column is asked for
    fn begin(&mut self) {}

    /// Ask for the name of column `index` (1-based). `None` means input ended.
    fn ask(&mut self, index: usize) -> Result<Option<String>>;

    /// Tell the user that `name` was rejected for column `index`
    fn reject(&mut self, index: usize, name: &str);
}

/// Prompt for column names until the user types [`STOP_WORD`].
///
/// Invalid names are rejected and the same column number is asked again.
/// End of input finishes collection like the stop word does.
pub fn collect_headers(prompt: &mut dyn ColumnPrompt) -> Result<HeaderList> {
    let mut headers = HeaderList::new();
    prompt.begin();

    loop {
        let index = headers.len() + 1;
        let Some(name) = prompt.ask(index)? else {
            break;
        };
        if name == STOP_WORD {
            break;
        }
        if headers.push(name.clone()).is_err() {
            prompt.reject(index, &name);
        }
    }

    Ok(headers)
}
