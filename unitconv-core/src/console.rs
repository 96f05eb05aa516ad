//! Console input and output
//!
//! Interactive flows read through an [`InputProvider`] and write to any
//! [`Write`], so they can run against canned responses in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Source of user-entered lines
pub trait InputProvider {
    /// Next line without its line terminator, or `None` at end of input
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads lines from standard input
#[derive(Debug, Default)]
pub struct StdinInput;

impl InputProvider for StdinInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Replays a fixed list of responses
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    responses: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    /// Responses not yet consumed
    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl InputProvider for ScriptedInput {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.responses.pop_front())
    }
}

/// Paired input and output for an interactive session
pub struct Console<I, W> {
    input: I,
    output: W,
}

impl Console<StdinInput, io::Stdout> {
    /// Console on the process's standard streams
    pub fn stdio() -> Self {
        Self::new(StdinInput, io::stdout())
    }
}

impl<I: InputProvider, W: Write> Console<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Show `prompt` and read one line. `None` means input is exhausted.
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self.input.next_line()?)
    }

    /// Writer for console output
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_parts(self) -> (I, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_prompt_round() {
        let mut console = Console::new(ScriptedInput::new(["first", "second"]), Vec::new());

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.input().remaining(), 1);
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(console.prompt("> ").unwrap(), None);

        let (_, output) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "> > > ");
    }
}
