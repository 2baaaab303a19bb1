use tle_types::prelude::LineNumber;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TleError {
    #[error("TLE input is invalid: {0}")]
    InvalidInput(String),
    #[error("TLE format is invalid: {0}")]
    InvalidFormat(String),
    #[error("TLE line {line} is invalid: {reason}")]
    InvalidTle {
        line: LineNumber,
        reason: InvalidTleReason,
    },
    #[error("Failed to parse field '{field}' from '{text}': {reason}")]
    FieldParse {
        field: &'static str,
        text: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTleReason {
    #[error("expected the line to start with '{expected}', found {found:?}")]
    LineNumber { expected: char, found: Option<char> },
    #[error("computed checksum {expected} but the line carries {found:?}")]
    Checksum { expected: u8, found: Option<char> },
}

impl TleError {
    pub(crate) fn field_parse<T: Into<String>, R: ToString>(
        field: &'static str,
        text: T,
        reason: R,
    ) -> Self {
        TleError::FieldParse {
            field,
            text: text.into(),
            reason: reason.to_string(),
        }
    }
}
