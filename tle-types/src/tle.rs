use derive_more::Display;

/// A two-line element set
/// https://en.wikipedia.org/wiki/Two-line_element_set
///
/// The lines are stored trimmed but otherwise untouched; structural and
/// checksum validation is left to the consumer.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display(fmt = "{}\n{}\n{}", "name", "line1", "line2")]
pub struct TleRecord {
    pub name: String,
    pub line1: String,
    pub line2: String,
}

impl TleRecord {
    /// Name given to element sets supplied without a title line
    pub const UNKNOWN_NAME: &'static str = "Unknown";

    pub fn new<N, L1, L2>(name: N, line1: L1, line2: L2) -> Self
    where
        N: Into<String>,
        L1: Into<String>,
        L2: Into<String>,
    {
        Self {
            name: name.into(),
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    pub fn unnamed<L1: Into<String>, L2: Into<String>>(line1: L1, line2: L2) -> Self {
        Self::new(Self::UNKNOWN_NAME, line1, line2)
    }

    pub fn line(&self, number: LineNumber) -> &str {
        match number {
            LineNumber::One => &self.line1,
            LineNumber::Two => &self.line2,
        }
    }
}

/// Which of the two element lines a field or checksum belongs to
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
pub enum LineNumber {
    #[display(fmt = "1")]
    One,
    #[display(fmt = "2")]
    Two,
}

impl LineNumber {
    /// The digit a well-formed line starts with
    pub const fn leading_char(self) -> char {
        match self {
            LineNumber::One => '1',
            LineNumber::Two => '2',
        }
    }
}
