//! Line-oriented terminal I/O.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Line-based prompt/response channel to the human.
pub trait Console {
    /// Prints `prompt` without a newline and reads one line of input.
    ///
    /// # Errors
    ///
    /// Fails when input is exhausted or the stream breaks.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Prints one line.
    fn say(&mut self, line: &str) -> Result<()>;
}

/// [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Splits the terminal back into its streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut raw = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut raw)
            .context("Failed to read from terminal")?;
        if read == 0 {
            anyhow::bail!("Input closed before the game finished");
        }
        // Undecodable bytes become U+FFFD and are rejected like any typo.
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_reads_line_and_echoes_prompt() {
        let mut term = Terminal::new(Cursor::new("a0\n"), Vec::new());
        assert_eq!(term.ask("Move: ").unwrap(), "a0\n");
        let (_, out) = term.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "Move: ");
    }

    #[test]
    fn test_ask_accepts_invalid_utf8_line() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"b1\n");
        let mut term = Terminal::new(Cursor::new(input), Vec::new());
        assert_eq!(term.ask("Move: ").unwrap(), "\u{fffd}\u{fffd}\n");
        assert_eq!(term.ask("Move: ").unwrap(), "b1\n");
    }

    #[test]
    fn test_ask_fails_on_eof() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new());
        assert!(term.ask("Move: ").is_err());
    }
}
