//! Streaming record reader

use crate::error::{Abort, Error, Result};
use crate::field::{DeferredError, Record};
use crate::parser::{count_fields, split_line, Span};
use std::io::BufRead;

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

/// Reads delimited records from a byte stream, one line at a time.
///
/// The field count is taken from the first line and every later line must
/// split into the same number of fields. The first line is itself delivered
/// to the callback as record 1. The line buffer and the span table are reused
/// across records and across calls to [`Reader::read`].
#[derive(Debug)]
pub struct Reader {
    delimiter: u8,
    line: Vec<u8>,
    spans: Vec<Span>,
}

impl Default for Reader {
    fn default() -> Self {
        Self::new()
    }
}

impl Reader {
    /// A reader using `,` as the delimiter
    pub fn new() -> Self {
        Self::with_delimiter(DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter,
            line: Vec::new(),
            spans: Vec::new(),
        }
    }

    #[inline]
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Takes effect on the next call to [`Reader::read`]. `\r` and `\n` are
    /// rejected there.
    pub fn set_delimiter(&mut self, delimiter: u8) {
        self.delimiter = delimiter;
    }

    /// Read every line of `input`, calling `next` with the 1-based line
    /// number and the split record.
    ///
    /// After each callback, a deferred field conversion error takes priority
    /// over an [`Abort`] returned by the callback; either one stops the read
    /// before the next line is fetched.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDelimiter`] if the delimiter is `\r` or `\n`; nothing
    ///   is read from `input` in that case.
    /// - [`Error::MalformedRecord`] if a line has fewer fields than the first.
    /// - [`Error::Field`] if the callback asked for a conversion that failed.
    /// - [`Error::Aborted`] if the callback returned an error.
    /// - [`Error::Io`] if reading from `input` fails.
    pub fn read<R, F>(&mut self, mut input: R, mut next: F) -> Result<()>
    where
        R: BufRead,
        F: FnMut(usize, &mut Record<'_>) -> Result<(), Abort>,
    {
        let delimiter = self.delimiter;
        if delimiter == b'\r' || delimiter == b'\n' {
            return Err(Error::InvalidDelimiter { delimiter });
        }

        let mut errors = DeferredError::new();
        let mut row = 0;

        loop {
            self.line.clear();
            if input.read_until(b'\n', &mut self.line)? == 0 {
                break;
            }
            let line = trim_line_terminator(&mut self.line);

            if row == 0 {
                self.spans.clear();
                self.spans
                    .resize(count_fields(line, delimiter), Span::default());
            }
            row += 1;

            if let Err(err) = split_line(line, delimiter, &mut self.spans) {
                return Err(Error::MalformedRecord {
                    line: row,
                    expected: err.expected,
                    found: err.found,
                    text: String::from_utf8_lossy(line).into_owned(),
                });
            }

            let outcome = next(row, &mut Record::new(line, &self.spans, &errors));

            if let Some(source) = errors.take() {
                return Err(Error::Field { line: row, source });
            }
            if let Err(source) = outcome {
                return Err(Error::Aborted { line: row, source });
            }
        }

        Ok(())
    }
}

/// Strip a trailing `\n`, then one trailing `\r`. A line without `\n` only
/// comes at end of input, so a final bare `\r` is dropped too.
#[inline]
fn trim_line_terminator(line: &mut [u8]) -> &mut [u8] {
    let mut end = line.len();
    if end > 0 && line[end - 1] == b'\n' {
        end -= 1;
    }
    if end > 0 && line[end - 1] == b'\r' {
        end -= 1;
    }
    &mut line[..end]
}
