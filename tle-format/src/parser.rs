//! Readers for single element sets and for catalogs of concatenated sets

use crate::error::TleError;
use nom::{
    branch::alt,
    character::complete::{char, line_ending, multispace0, not_line_ending, space0},
    combinator::{eof, recognize},
    error::ErrorKind,
    multi::fold_many0,
    sequence::{preceded, terminated, tuple},
};
use std::borrow::Cow;
use tle_types::prelude::*;
use tracing::{debug, trace};

pub type Result<I, O, E = SyntaxError<I>> = std::result::Result<(I, O), nom::Err<E>>;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SyntaxError<I> {
    #[error("Parse error")]
    Nom(I, ErrorKind),
}

/// Anything an element set can be read from
///
/// Implemented for raw text (`str`, `String`), pre-split lines (slices,
/// arrays and `Vec`s of string-likes) and already parsed records.
pub trait TleSource {
    fn to_tle(&self) -> std::result::Result<Cow<'_, TleRecord>, TleError>;
}

impl TleSource for TleRecord {
    fn to_tle(&self) -> std::result::Result<Cow<'_, TleRecord>, TleError> {
        Ok(Cow::Borrowed(self))
    }
}

impl TleSource for str {
    fn to_tle(&self) -> std::result::Result<Cow<'_, TleRecord>, TleError> {
        parse_tle(self).map(Cow::Owned)
    }
}

impl TleSource for String {
    fn to_tle(&self) -> std::result::Result<Cow<'_, TleRecord>, TleError> {
        self.as_str().to_tle()
    }
}

impl<S: AsRef<str>> TleSource for [S] {
    fn to_tle(&self) -> std::result::Result<Cow<'_, TleRecord>, TleError> {
        parse_tle_lines(self).map(Cow::Owned)
    }
}

impl<S: AsRef<str>, const N: usize> TleSource for [S; N] {
    fn to_tle(&self) -> std::result::Result<Cow<'_, TleRecord>, TleError> {
        self.as_slice().to_tle()
    }
}

impl<S: AsRef<str>> TleSource for Vec<S> {
    fn to_tle(&self) -> std::result::Result<Cow<'_, TleRecord>, TleError> {
        self.as_slice().to_tle()
    }
}

impl<T: TleSource + ?Sized> TleSource for &T {
    fn to_tle(&self) -> std::result::Result<Cow<'_, TleRecord>, TleError> {
        (**self).to_tle()
    }
}

/// Parse a single element set given as 2 (no name) or 3 (name first) lines.
///
/// Whitespace around every line and around the whole block is dropped, as are
/// blank lines. Checksums are not verified here, see [`crate::validate`].
pub fn parse_tle(input: &str) -> std::result::Result<TleRecord, TleError> {
    let lines: Vec<&str> = non_empty_lines(input.trim().lines()).collect();
    if lines.len() > 3 {
        return Err(TleError::InvalidFormat(format!(
            "expected 2 or 3 lines, found {}; use parse_tle_set for catalogs",
            lines.len()
        )));
    }
    record_from_lines(&lines)
}

/// Parse a single element set from pre-split lines
pub fn parse_tle_lines<S: AsRef<str>>(entries: &[S]) -> std::result::Result<TleRecord, TleError> {
    if let Some(entry) = entries
        .iter()
        .map(AsRef::as_ref)
        .find(|e| e.trim().contains(['\n', '\r']))
    {
        return Err(TleError::InvalidInput(format!(
            "line entries must not contain line breaks, found '{}'",
            entry.trim()
        )));
    }
    let lines: Vec<&str> = non_empty_lines(entries.iter().map(AsRef::as_ref)).collect();
    if lines.len() > 3 {
        return Err(TleError::InvalidInput(format!(
            "expected 2 or 3 line entries, found {}",
            lines.len()
        )));
    }
    record_from_lines(&lines)
}

fn non_empty_lines<'a, I: Iterator<Item = &'a str>>(lines: I) -> impl Iterator<Item = &'a str> {
    lines.map(str::trim).filter(|l| !l.is_empty())
}

fn record_from_lines(lines: &[&str]) -> std::result::Result<TleRecord, TleError> {
    let tle = match lines {
        [line1, line2] => TleRecord::unnamed(*line1, *line2),
        [name, line1, line2] => TleRecord::new(*name, *line1, *line2),
        _ => {
            return Err(TleError::InvalidFormat(format!(
                "expected at least 2 non-empty lines, found {}",
                lines.len()
            )))
        }
    };

    check_element_lines(&tle)?;
    trace!(name = %tle.name, "Parsed TLE");
    Ok(tle)
}

/// Fields are sliced by column, the element lines must be plain ASCII
fn check_element_lines(tle: &TleRecord) -> std::result::Result<(), TleError> {
    match [&tle.line1, &tle.line2].into_iter().find(|l| !l.is_ascii()) {
        Some(line) => Err(TleError::InvalidInput(format!(
            "element line contains non-ASCII characters: '{line}'"
        ))),
        None => Ok(()),
    }
}

/// Parse a catalog of concatenated element sets.
///
/// Entries may mix the 2 and 3 line forms and be separated by blank lines.
pub fn parse_tle_set(set: &str) -> std::result::Result<Vec<TleRecord>, TleError> {
    let parsed: Result<&str, Vec<TleRecord>> = fold_many0(tle, Vec::new, |mut tle_set, tle| {
        tle_set.push(tle);
        tle_set
    })(set);

    let (rest, tle_set) = parsed.map_err(|e| TleError::InvalidFormat(e.to_string()))?;
    if let Some(line) = rest.trim_start().lines().next() {
        return Err(TleError::InvalidFormat(format!(
            "unexpected content after {} entries: '{}'",
            tle_set.len(),
            line.trim()
        )));
    }

    debug!(entries = tle_set.len(), "Parsed TLE set");
    Ok(tle_set)
}

fn tle(s: &str) -> Result<&str, TleRecord> {
    let (s, _) = multispace0(s)?;
    let (rest, tle) = alt((named_tle, unnamed_tle))(s)?;
    match check_element_lines(&tle) {
        Ok(()) => Ok((rest, tle)),
        Err(_) => Err(nom::Err::Error(SyntaxError::Nom(s, ErrorKind::Verify))),
    }
}

fn named_tle(s: &str) -> Result<&str, TleRecord> {
    let (s, name) = terminated(not_line_ending, line_ending)(s)?;
    let (s, line1) = terminated(element_line('1'), line_ending)(s)?;
    let (s, line2) = terminated(element_line('2'), end_of_entry)(s)?;
    Ok((s, TleRecord::new(name.trim(), line1.trim(), line2.trim())))
}

fn unnamed_tle(s: &str) -> Result<&str, TleRecord> {
    let (s, line1) = terminated(element_line('1'), line_ending)(s)?;
    let (s, line2) = terminated(element_line('2'), end_of_entry)(s)?;
    Ok((s, TleRecord::unnamed(line1.trim(), line2.trim())))
}

/// An element line: its line number followed by a space
fn element_line(number: char) -> impl Fn(&str) -> Result<&str, &str> {
    move |s| {
        preceded(
            space0,
            recognize(tuple((char(number), char(' '), not_line_ending))),
        )(s)
    }
}

fn end_of_entry(s: &str) -> Result<&str, &str> {
    alt((line_ending, eof))(s)
}

impl<I> nom::error::ParseError<I> for SyntaxError<I> {
    fn from_error_kind(s: I, kind: ErrorKind) -> Self {
        SyntaxError::Nom(s, kind)
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}
