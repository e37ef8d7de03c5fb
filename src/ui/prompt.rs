//! Blocking line prompts.
//!
//! The session never talks to stdin directly: it asks a [`Prompter`],
//! so the same capture flow runs against the terminal or a scripted source.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Cancel keyword used when none is configured.
pub const DEFAULT_CANCEL_KEYWORD: &str = ":cancel";

pub trait Prompter {
    /// Ask for a line of text.
    ///
    /// Returns `Ok(None)` when the user cancels the dialog, otherwise the
    /// entered text (or `default` for an empty answer).
    fn prompt(&mut self, message: &str, default: &str) -> AppResult<Option<String>>;

    /// Ask a yes/no question. Anything but an explicit yes declines.
    fn confirm(&mut self, message: &str) -> AppResult<bool>;
}

/// Prompter and command reader bound to a line-based input/output pair.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    cancel_keyword: String,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(cancel_keyword: &str) -> Self {
        Terminal::new(io::stdin().lock(), io::stdout(), cancel_keyword)
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, cancel_keyword: &str) -> Self {
        Self {
            input,
            output,
            cancel_keyword: cancel_keyword.to_string(),
        }
    }

    /// Read one line without its line terminator. `None` on end of input.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Read the next session command line. `None` on end of input.
    pub fn read_command(&mut self, prompt: &str) -> AppResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

impl<R: BufRead, W: Write> Prompter for Terminal<R, W> {
    fn prompt(&mut self, message: &str, default: &str) -> AppResult<Option<String>> {
        writeln!(self.output, "{message}")?;
        if default.is_empty() {
            write!(self.output, "> ")?;
        } else {
            write!(self.output, "[{default}] > ")?;
        }
        self.output.flush()?;

        let answer = match self.read_line()? {
            None => {
                // EOF closes the dialog like a cancel button
                writeln!(self.output)?;
                return Ok(None);
            }
            Some(line) => line,
        };

        if answer.trim() == self.cancel_keyword {
            return Ok(None);
        }

        if answer.is_empty() {
            Ok(Some(default.to_string()))
        } else {
            Ok(Some(answer))
        }
    }

    fn confirm(&mut self, message: &str) -> AppResult<bool> {
        warning(message);
        write!(self.output, "Confirm [y/N]: ")?;
        self.output.flush()?;

        match self.read_line()? {
            Some(s) => Ok(matches!(s.trim().to_lowercase().as_str(), "y" | "yes")),
            None => Ok(false),
        }
    }
}
