//! Errors that end a read

use crate::field::FieldError;
use thiserror::Error;

/// Value a record callback returns to stop reading early
pub type Abort = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("delimiter cannot be \\r or \\n (got {delimiter:#04x})")]
    InvalidDelimiter { delimiter: u8 },
    #[error("line {line}: expected {expected} fields but found {found}: \"{text}\"")]
    MalformedRecord {
        line: usize,
        expected: usize,
        found: usize,
        text: String,
    },
    #[error("line {line}: {source}")]
    Field {
        line: usize,
        #[source]
        source: FieldError,
    },
    #[error("line {line}: {source}")]
    Aborted {
        line: usize,
        #[source]
        source: Abort,
    },
    #[error("error reading input: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The 1-based line the error is attributed to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedRecord { line, .. } | Self::Field { line, .. } | Self::Aborted { line, .. } => {
                Some(*line)
            }
            Self::InvalidDelimiter { .. } | Self::Io(_) => None,
        }
    }
}
