//! Line-based console over any reader/writer pair
//!
//! Production wires this to locked stdin/stdout; tests feed it an in-memory
//! script and inspect the captured output.

use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

use crate::core::error::Result;
use crate::core::ports::Console;

/// Console reading lines from `R` and writing to `W`
#[derive(Debug)]
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Wrap an input and an output
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink (used by tests to inspect what was written)
    pub fn into_output(self) -> W {
        self.output
    }
}

impl StdConsole<StdinLock<'static>, StdoutLock<'static>> {
    /// Console on the process's standard input and output
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        // Invalid UTF-8 is user input, not a console failure
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }
}
