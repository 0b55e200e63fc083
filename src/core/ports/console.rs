//! Console port
//!
//! Line-based text input and output used by the command loop.

use std::str::FromStr;

use crate::core::error::{Error, Result};

/// A line-oriented terminal
pub trait Console {
    /// Read one line without its trailing newline
    ///
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Write `text` followed by a newline
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Write `text` without a newline and wait for the answer
    fn prompt(&mut self, text: &str) -> Result<Option<String>>;

    /// Prompt for a value and parse the trimmed answer
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the answer does not parse.
    fn prompt_parsed<T: FromStr>(&mut self, text: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        let Some(answer) = self.prompt(text)? else {
            return Ok(None);
        };
        let trimmed = answer.trim();
        trimmed.parse().map(Some).map_err(|_| Error::InvalidInput(trimmed.to_string()))
    }

    /// Ask a yes/no question; only `s` or `S` counts as yes
    fn confirm(&mut self, question: &str) -> Result<bool>
    where
        Self: Sized,
    {
        let answer = self.prompt(&format!("{question} (s/n): "))?;
        Ok(answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("s")))
    }
}
