//! Line splitting into a fixed number of fields

use memchr::{memchr, memchr_iter};
use thiserror::Error;

/// Byte range of one field within its line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A line ran out of delimiters before every slot was filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} fields but found {found}")]
pub struct NotEnoughFields {
    pub expected: usize,
    pub found: usize,
}

/// Number of fields in `line`: one more than its delimiter count
#[inline]
pub fn count_fields(line: &[u8], delimiter: u8) -> usize {
    memchr_iter(delimiter, line).count() + 1
}

/// Split `line` on `delimiter` into exactly `spans.len()` fields, left to
/// right, writing each field's byte range into `spans`.
///
/// The last slot always takes the rest of the line, delimiters included, so a
/// single slot table receives the whole line untouched. An empty `spans`
/// table is left alone.
///
/// # Errors
///
/// Returns [`NotEnoughFields`] if the line holds fewer than
/// `spans.len() - 1` delimiters. The contents of `spans` are unspecified
/// afterwards.
#[inline]
pub fn split_line(line: &[u8], delimiter: u8, spans: &mut [Span]) -> Result<(), NotEnoughFields> {
    let Some((last, init)) = spans.split_last_mut() else {
        return Ok(());
    };

    let mut start = 0;
    for (i, span) in init.iter_mut().enumerate() {
        let Some(idx) = memchr(delimiter, &line[start..]) else {
            return Err(NotEnoughFields {
                expected: init.len() + 1,
                found: i + 1,
            });
        };
        *span = Span {
            start,
            end: start + idx,
        };
        start += idx + 1;
    }
    *last = Span {
        start,
        end: line.len(),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_to_strings(line: &str, delimiter: u8, slots: usize) -> Vec<&str> {
        let mut spans = vec![Span::default(); slots];
        split_line(line.as_bytes(), delimiter, &mut spans).unwrap();
        spans.iter().map(|s| &line[s.start..s.end]).collect()
    }

    #[test]
    fn test_split_matches_naive_split() {
        let lines = [
            "",
            "foo",
            "foo,bar",
            "foo,bar,baz",
            "a,b,c",
            ",two,three",
            "one,two,",
            ",,",
            "aa,bb,cc,dd,ee,ff,gg,",
        ];

        for line in lines {
            let expected: Vec<&str> = line.split(',').collect();
            assert_eq!(split_to_strings(line, b',', expected.len()), expected);
        }
    }

    #[test]
    fn test_single_slot_keeps_whole_line() {
        assert_eq!(split_to_strings("foo|bar", b'|', 1), vec!["foo|bar"]);
    }

    #[test]
    fn test_last_slot_keeps_extra_delimiters() {
        assert_eq!(split_to_strings("a|b|c|d", b'|', 2), vec!["a", "b|c|d"]);
    }

    #[test]
    fn test_not_enough_fields() {
        let mut spans = vec![Span::default(); 3];
        assert_eq!(
            split_line(b"blah", b'|', &mut spans),
            Err(NotEnoughFields {
                expected: 3,
                found: 1
            })
        );
        assert_eq!(
            split_line(b"a|b", b'|', &mut spans),
            Err(NotEnoughFields {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_empty_table() {
        let mut spans: [Span; 0] = [];
        assert!(split_line(b"a,b", b',', &mut spans).is_ok());
    }

    #[test]
    fn test_count_fields() {
        assert_eq!(count_fields(b"", b','), 1);
        assert_eq!(count_fields(b"bill|30|154.5", b'|'), 3);
        assert_eq!(count_fields(b"bill|30|154.5", b','), 1);
        assert_eq!(count_fields(b",,", b','), 3);
    }

    #[test]
    fn test_span_len() {
        let span = Span { start: 2, end: 5 };
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert!(Span::default().is_empty());
    }
}
