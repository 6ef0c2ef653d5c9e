//! Terminal trait definition.

use crate::error::SessionError;

/// Trait for the interactive line I/O a session needs
///
/// Implementations can be:
/// - IoTerminal over stdin/stdout (or any reader/writer pair)
/// - ScriptedTerminal for testing
pub trait Terminal {
    /// Show `prompt` without a newline and read one line of input.
    ///
    /// The trailing line terminator is stripped. End of input is
    /// [`SessionError::InputClosed`].
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError>;

    /// Write one full line of output
    fn write_line(&mut self, line: &str) -> Result<(), SessionError>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        (**self).read_line(prompt)
    }

    fn write_line(&mut self, line: &str) -> Result<(), SessionError> {
        (**self).write_line(line)
    }
}
