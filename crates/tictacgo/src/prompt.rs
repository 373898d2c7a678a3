//! Line-based prompting over any reader/writer pair.

use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Failure of the terminal front end, as opposed to a rejected move.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PlayError {
    /// The input stream closed or could not be read.
    #[display("Input unavailable: {reason}")]
    InputUnavailable {
        /// What went wrong.
        reason: String,
    },

    /// Writing to the output failed.
    #[display("Failed to write output: {_0}")]
    #[from]
    Output(std::io::Error),
}

/// Source of player input and sink for game output.
pub trait Prompter {
    /// Shows `label` and waits for one line of input, without its line ending.
    fn ask(&mut self, label: &str) -> Result<String, PlayError>;

    /// Shows a message on its own line.
    fn say(&mut self, message: &str) -> Result<(), PlayError>;
}

/// [`Prompter`] reading lines from a [`BufRead`] and writing to a [`Write`].
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    #[instrument(skip(self))]
    fn ask(&mut self, label: &str) -> Result<String, PlayError> {
        write!(self.output, "{} ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|e| {
            warn!(error = %e, "Failed to read input");
            PlayError::InputUnavailable {
                reason: e.to_string(),
            }
        })?;
        if read == 0 {
            warn!("Input stream closed");
            return Err(PlayError::InputUnavailable {
                reason: "input stream closed".to_string(),
            });
        }

        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        debug!(answer = %answer, "Read input");
        Ok(answer)
    }

    fn say(&mut self, message: &str) -> Result<(), PlayError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_strips_line_ending() {
        let mut prompter = LinePrompter::new(&b"5\r\n9\n"[..], Vec::new());
        assert_eq!(prompter.ask("first:").unwrap(), "5");
        assert_eq!(prompter.ask("second:").unwrap(), "9");
        let (_, output) = prompter.into_inner();
        assert_eq!(String::from_utf8(output).unwrap(), "first: second: ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut prompter = LinePrompter::new(&b"7"[..], Vec::new());
        assert_eq!(prompter.ask(">").unwrap(), "7");
    }

    #[test]
    fn test_closed_input_is_unavailable() {
        let mut prompter = LinePrompter::new(&b""[..], Vec::new());
        assert!(matches!(
            prompter.ask(">"),
            Err(PlayError::InputUnavailable { .. })
        ));
    }

    #[test]
    fn test_say_writes_line() {
        let mut prompter = LinePrompter::new(&b""[..], Vec::new());
        prompter.say("hello").unwrap();
        let (_, output) = prompter.into_inner();
        assert_eq!(output, b"hello\n");
    }
}
