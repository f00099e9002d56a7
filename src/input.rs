/**
 * Operator console: a token scanner over any `BufRead`, paired with the
 * writer that prompts and results go to.
 */
use std::{
    fmt::Display,
    io::{BufRead, Write},
    str::FromStr,
};

use tracing::warn;

use crate::error::ConsoleError;

/// Splits input into whitespace separated tokens while still allowing the
/// rest of the current line to be taken whole.
pub struct Scanner<R> {
    reader: R,
    line: String,
    position: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Scanner {
            reader,
            line: String::new(),
            position: 0,
        }
    }

    fn remainder(&self) -> &str {
        &self.line[self.position..]
    }

    fn read_next_line(&mut self) -> Result<(), ConsoleError> {
        self.line.clear();
        self.position = 0;
        if self.reader.read_line(&mut self.line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(())
    }

    pub fn next_token(&mut self) -> Result<String, ConsoleError> {
        loop {
            let rest = self.remainder();
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let start = self.position + (rest.len() - trimmed.len());
                let length = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
                let token = trimmed[..length].to_owned();
                self.position = start + length;
                return Ok(token);
            }
            self.read_next_line()?;
        }
    }

    /// Unread text left on the current line, or the whole next line when
    /// nothing but whitespace is left. Only the line ending is removed from
    /// a whole line; a rest-of-line also loses the whitespace that
    /// separated it from the previous token.
    pub fn next_line(&mut self) -> Result<String, ConsoleError> {
        let pending = !self.remainder().trim().is_empty();
        if !pending {
            self.read_next_line()?;
        }
        let rest = strip_line_ending(self.remainder());
        let line = if pending { rest.trim_start() } else { rest }.to_owned();
        self.position = self.line.len();
        Ok(line)
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

pub struct Console<R, W> {
    scanner: Scanner<R>,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, output: W) -> Self {
        Console {
            scanner: Scanner::new(reader),
            output,
        }
    }

    pub fn say(&mut self, message: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.output.flush()?;
        self.scanner.next_line()
    }

    /// Keeps reading tokens until one parses, telling the operator about
    /// each one that doesn't.
    pub fn read_number<T>(&mut self) -> Result<T, ConsoleError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.output.flush()?;
        loop {
            let token = self.scanner.next_token()?;
            match token.parse() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(%token, %err, "malformed numeric input");
                    self.say(format_args!(
                        "Invalid input '{}'! Please enter a number:",
                        token
                    ))?;
                    self.output.flush()?;
                }
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
