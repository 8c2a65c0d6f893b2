//! Numeric conversions over raw field bytes

use thiserror::Error;

/// Powers of ten indexed by digit position, counted from the right.
const POW10: [u64; 20] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

/// `u32::MAX` has 10 decimal digits.
const MAX_U32_DIGITS: usize = 10;

/// Failure to read a field as an unsigned 32-bit integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseUintError {
    #[error("\"{literal}\" is too long to be parsed as a uint32")]
    TooLong { literal: String },
    #[error("\"{literal}\" contains non-numeric character '{}'", .byte.escape_ascii())]
    InvalidDigit { literal: String, byte: u8 },
    #[error("\"{literal}\" overflows uint32")]
    Overflow { literal: String },
}

/// Failure to read a field as a 32-bit float.
#[derive(Debug, Clone, Error)]
pub enum ParseFloatError {
    #[error("\"{literal}\" is not a valid float32: {source}")]
    Invalid {
        literal: String,
        #[source]
        source: lexical_core::Error,
    },
    #[error("\"{literal}\" is out of range for float32")]
    OutOfRange { literal: String },
}

impl ParseFloatError {
    /// The text that failed to parse
    pub fn literal(&self) -> &str {
        match self {
            Self::Invalid { literal, .. } | Self::OutOfRange { literal } => literal,
        }
    }
}

fn literal(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Parse ASCII decimal digits into a `u32`.
///
/// Only the digits `0`-`9` are accepted: no sign, no whitespace, no
/// separators. Leading zeros are allowed and the empty slice is zero.
///
/// # Errors
///
/// Returns [`ParseUintError::TooLong`] for more than ten bytes,
/// [`ParseUintError::InvalidDigit`] naming the first non-digit byte, and
/// [`ParseUintError::Overflow`] when the value exceeds `u32::MAX`.
#[inline]
pub fn parse_u32(bytes: &[u8]) -> Result<u32, ParseUintError> {
    if bytes.len() > MAX_U32_DIGITS {
        return Err(ParseUintError::TooLong {
            literal: literal(bytes),
        });
    }

    let mut place = bytes.len();
    let mut value = 0u64;
    for &byte in bytes {
        if !byte.is_ascii_digit() {
            return Err(ParseUintError::InvalidDigit {
                literal: literal(bytes),
                byte,
            });
        }
        place -= 1;
        value += u64::from(byte - b'0') * POW10[place];
    }

    u32::try_from(value).map_err(|_| ParseUintError::Overflow {
        literal: literal(bytes),
    })
}

/// Parse a decimal floating point literal into an `f32`, rounding correctly
/// to single precision. Works on the bytes directly without building a `str`.
///
/// # Errors
///
/// Returns [`ParseFloatError::Invalid`] if `bytes` is empty or not a complete
/// literal, and [`ParseFloatError::OutOfRange`] if a finite literal rounds to
/// infinity in single precision.
#[inline]
pub fn parse_f32(bytes: &[u8]) -> Result<f32, ParseFloatError> {
    let value = lexical_core::parse::<f32>(bytes).map_err(|source| ParseFloatError::Invalid {
        literal: literal(bytes),
        source,
    })?;

    if value.is_infinite() && !is_infinity_literal(bytes) {
        return Err(ParseFloatError::OutOfRange {
            literal: literal(bytes),
        });
    }
    Ok(value)
}

/// `inf` or `infinity` in any case, optionally signed
fn is_infinity_literal(bytes: &[u8]) -> bool {
    let unsigned = match bytes.first() {
        Some(b'+' | b'-') => &bytes[1..],
        _ => bytes,
    };
    unsigned.first().is_some_and(|b| b.eq_ignore_ascii_case(&b'i'))
}
