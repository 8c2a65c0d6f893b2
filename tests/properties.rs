//! Property tests for number parsing and line splitting.

use hastycsv::number::{parse_u32, ParseUintError};
use hastycsv::parser::{split_line, NotEnoughFields, Span};
use proptest::prelude::*;

fn split_to_strings(line: &str, delimiter: u8, slots: usize) -> Result<Vec<String>, NotEnoughFields> {
    let mut spans = vec![Span::default(); slots];
    split_line(line.as_bytes(), delimiter, &mut spans)?;
    Ok(spans
        .iter()
        .map(|s| line[s.start..s.end].to_string())
        .collect())
}

proptest! {
    #[test]
    fn u32_matches_std(v in any::<u32>()) {
        prop_assert_eq!(parse_u32(v.to_string().as_bytes()), Ok(v));
    }

    #[test]
    fn u32_accepts_leading_zeros(v in 0u32..100_000, zeros in 0usize..5) {
        let s = format!("{}{}", "0".repeat(zeros), v);
        prop_assert_eq!(parse_u32(s.as_bytes()), Ok(v));
    }

    #[test]
    fn u32_overflow(v in (u64::from(u32::MAX) + 1)..10_000_000_000u64) {
        let is_overflow = matches!(parse_u32(v.to_string().as_bytes()), Err(ParseUintError::Overflow { .. }));
        prop_assert!(is_overflow);
    }

    #[test]
    fn u32_too_long(s in "[0-9]{11,20}") {
        let is_too_long = matches!(parse_u32(s.as_bytes()), Err(ParseUintError::TooLong { .. }));
        prop_assert!(is_too_long);
    }

    #[test]
    fn u32_first_non_digit_reported(
        head in "[0-9]{0,4}",
        bad in "[^0-9]",
        tail in "[a-z0-9]{0,4}"
    ) {
        let s = format!("{}{}{}", head, bad, tail);
        prop_assume!(s.len() <= 10);
        match parse_u32(s.as_bytes()) {
            Err(ParseUintError::InvalidDigit { byte, .. }) => prop_assert_eq!(byte, bad.as_bytes()[0]),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn split_matches_naive_split(line in "[a-c,]{0,30}") {
        let expected: Vec<String> = line.split(',').map(str::to_string).collect();
        prop_assert_eq!(split_to_strings(&line, b',', expected.len()).unwrap(), expected);
    }

    #[test]
    fn single_slot_keeps_line(line in "[a-c|]{0,30}") {
        prop_assert_eq!(split_to_strings(&line, b'|', 1).unwrap(), vec![line.clone()]);
    }

    #[test]
    fn too_few_delimiters_fail(line in "[a-c,]{0,30}", extra in 1usize..4) {
        let slots = line.matches(',').count() + 1 + extra;
        prop_assert!(split_to_strings(&line, b',', slots).is_err());
    }
}
