//! Terminal backed by a buffered reader and a writer.

use super::traits::Terminal;
use crate::error::SessionError;
use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

/// Terminal over any `BufRead` + `Write` pair
pub struct IoTerminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> IoTerminal<R, W> {
    /// Create a terminal from a reader and a writer
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the terminal, returning the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl IoTerminal<StdinLock<'static>, StdoutLock<'static>> {
    /// Terminal on the process's locked stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> Terminal for IoTerminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<(), SessionError> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}
