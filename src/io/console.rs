use std::io::{BufRead, Write};

use crate::common::error::AppError;

/// Line-oriented input paired with the output prompts are written to.
///
/// Generic over the streams so sessions can run on stdin/stdout or on
/// in-memory buffers in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line without its line terminator. Bytes that are not valid
    /// UTF-8 become U+FFFD instead of failing the read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EndOfInput`] once the input is exhausted.
    pub fn read_line(&mut self) -> Result<String, AppError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AppError::EndOfInput);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Writes `label` without a newline, flushes, then reads the answer.
    pub fn prompt(&mut self, label: &str) -> Result<String, AppError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
