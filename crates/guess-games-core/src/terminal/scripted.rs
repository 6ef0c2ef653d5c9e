//! Scripted terminal for testing.

use super::traits::Terminal;
use crate::error::SessionError;
use std::collections::VecDeque;

/// In-memory terminal that replays a fixed list of input lines
///
/// Every prompt and written line is recorded so tests can assert on the
/// exact transcript a session produced.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTerminal {
    /// Lines not yet consumed by `read_line`
    inputs: VecDeque<String>,
    /// Prompts shown, in order
    prompts: Vec<String>,
    /// Lines written, in order
    output: Vec<String>,
}

impl ScriptedTerminal {
    /// Create a terminal that will answer prompts with `inputs` in order
    pub fn new<I>(inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Lines written so far
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Prompts shown so far
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Number of scripted input lines never read
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Whether any written line equals `line`
    pub fn printed(&self, line: &str) -> bool {
        self.output.iter().any(|l| l == line)
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop_front().ok_or(SessionError::InputClosed)
    }

    fn write_line(&mut self, line: &str) -> Result<(), SessionError> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_replays_inputs_in_order() {
        let mut term = ScriptedTerminal::new(["25", "75"]);
        assert_eq!(term.read_line("guess: ").unwrap(), "25");
        assert_eq!(term.read_line("guess: ").unwrap(), "75");
        assert_eq!(term.prompts(), ["guess: ", "guess: "]);
        assert_eq!(term.remaining_inputs(), 0);
    }

    #[test]
    fn test_scripted_exhausted_is_input_closed() {
        let mut term = ScriptedTerminal::new(Vec::<String>::new());
        assert!(matches!(
            term.read_line("guess: "),
            Err(SessionError::InputClosed)
        ));
    }

    #[test]
    fn test_scripted_records_output() {
        let mut term = ScriptedTerminal::default();
        term.write_line("Too low! Try again.").unwrap();
        assert!(term.printed("Too low! Try again."));
        assert!(!term.printed("Too high! Try again."));
    }

    #[test]
    fn test_scripted_through_mutable_reference() {
        fn echo<T: Terminal>(mut term: T) -> Result<(), SessionError> {
            let choice = term.read_line("choice: ")?;
            term.write_line(&format!("You chose: {}", choice))
        }

        let mut term = ScriptedTerminal::new(["rock"]);
        echo(&mut term).unwrap();
        assert!(term.printed("You chose: rock"));
    }
}
