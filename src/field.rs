//! Field views over the current line
//!
//! A [`Record`] lends out [`Field`]s that borrow the reader's line buffer, so
//! neither can outlive the callback invocation that received them. Numeric
//! accessors never fail at the call site: the first failure is parked in a
//! [`DeferredError`] slot that the reader inspects once the callback returns.

use crate::number::{parse_f32, parse_u32, ParseFloatError, ParseUintError};
use crate::parser::Span;
use std::cell::OnceCell;
use std::fmt;
use std::str::Utf8Error;
use thiserror::Error;

/// A field that could not be converted to the requested type
#[derive(Debug, Clone, Error)]
pub enum FieldError {
    #[error("can't parse field as uint32: {0}")]
    Uint(#[from] ParseUintError),
    #[error("can't parse field as float32: {0}")]
    Float(#[from] ParseFloatError),
}

/// Holds the first field conversion failure of a record; later failures are
/// dropped.
#[derive(Debug, Default)]
pub struct DeferredError(OnceCell<FieldError>);

impl DeferredError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `err` unless an earlier failure is already held.
    #[inline]
    pub fn set(&self, err: impl Into<FieldError>) {
        let _ = self.0.set(err.into());
    }

    pub fn get(&self) -> Option<&FieldError> {
        self.0.get()
    }

    pub fn take(&mut self) -> Option<FieldError> {
        self.0.take()
    }
}

/// A non-owning view of one field of the current line
#[derive(Clone, Copy)]
pub struct Field<'a> {
    data: &'a [u8],
    errors: &'a DeferredError,
}

impl<'a> Field<'a> {
    pub fn new(data: &'a [u8], errors: &'a DeferredError) -> Self {
        Self { data, errors }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// The raw bytes of this field
    #[inline(always)]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// The field as UTF-8 text, without copying
    pub fn as_str(&self) -> Result<&'a str, Utf8Error> {
        std::str::from_utf8(self.data)
    }

    /// Parse this field as a `u32`, returning 0 and deferring the error on
    /// failure.
    #[inline]
    pub fn as_u32(&self) -> u32 {
        parse_u32(self.data).unwrap_or_else(|err| {
            self.errors.set(err);
            0
        })
    }

    /// Parse this field as an `f32`, returning 0.0 and deferring the error on
    /// failure.
    #[inline]
    pub fn as_f32(&self) -> f32 {
        parse_f32(self.data).unwrap_or_else(|err| {
            self.errors.set(err);
            0.0
        })
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.data))
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field({:?})", String::from_utf8_lossy(self.data))
    }
}

/// One split line handed to the record callback
pub struct Record<'a> {
    line: &'a mut [u8],
    spans: &'a [Span],
    errors: &'a DeferredError,
}

impl<'a> Record<'a> {
    pub(crate) fn new(line: &'a mut [u8], spans: &'a [Span], errors: &'a DeferredError) -> Self {
        Self {
            line,
            spans,
            errors,
        }
    }

    /// Number of fields, fixed for the whole read
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The whole line, without its terminator
    pub fn as_bytes(&self) -> &[u8] {
        self.line
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<Field<'_>> {
        let span = self.spans.get(i)?;
        Some(Field::new(&self.line[span.start..span.end], self.errors))
    }

    /// # Panics
    ///
    /// Panics if `i` is not less than [`Record::len`].
    #[inline]
    pub fn field(&self, i: usize) -> Field<'_> {
        let span = self.spans[i];
        Field::new(&self.line[span.start..span.end], self.errors)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Field<'_>> + '_ {
        self.spans
            .iter()
            .map(move |span| Field::new(&self.line[span.start..span.end], self.errors))
    }

    /// Lowercase the ASCII letters of field `i` in the line buffer itself and
    /// return a view of the result. Other bytes are left alone. The change is
    /// seen by every later view of this field during the same callback.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than [`Record::len`].
    pub fn to_lower_ascii(&mut self, i: usize) -> Field<'_> {
        let span = self.spans[i];
        let data = &mut self.line[span.start..span.end];
        data.make_ascii_lowercase();
        Field::new(data, self.errors)
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
