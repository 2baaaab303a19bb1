//! The per-line modulo-10 integrity digit

use crate::{
    error::{InvalidTleReason, TleError},
    parser::TleSource,
};
use tle_types::prelude::*;

/// Compute the checksum digit of an element line.
///
/// Every character but the last (the checksum itself) contributes: digits their
/// value, `-` one, anything else nothing.
pub fn line_checksum(line: &str) -> u8 {
    let mut chars = line.chars();
    chars.next_back();
    let sum: u32 = chars
        .map(|c| match c {
            '-' => 1,
            c => c.to_digit(10).unwrap_or(0),
        })
        .sum();
    (sum % 10) as u8
}

/// Check line numbers and checksum digits of both element lines
pub fn validate(tle: &TleRecord) -> Result<(), TleError> {
    validate_line(&tle.line1, LineNumber::One)?;
    validate_line(&tle.line2, LineNumber::Two)
}

fn validate_line(line: &str, number: LineNumber) -> Result<(), TleError> {
    let first = line.chars().next();
    if first != Some(number.leading_char()) {
        return Err(TleError::InvalidTle {
            line: number,
            reason: InvalidTleReason::LineNumber {
                expected: number.leading_char(),
                found: first,
            },
        });
    }

    let expected = line_checksum(line);
    let found = line.chars().next_back();
    if found.and_then(|c| c.to_digit(10)) != Some(u32::from(expected)) {
        return Err(TleError::InvalidTle {
            line: number,
            reason: InvalidTleReason::Checksum { expected, found },
        });
    }

    Ok(())
}

/// True when the input parses and both element lines pass [`validate`]
pub fn is_valid_tle<T: TleSource + ?Sized>(tle: &T) -> bool {
    tle.to_tle().map(|t| validate(&t).is_ok()).unwrap_or(false)
}
