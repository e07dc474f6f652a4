use crate::error::{ConvertError, Result};
use std::{fmt, path::PathBuf, str::FromStr};

/// Single-byte field separator for the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter(u8);

impl Delimiter {
    pub const SEMICOLON: Delimiter = Delimiter(b';');

    pub fn as_byte(self) -> u8 {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::SEMICOLON
    }
}

impl TryFrom<char> for Delimiter {
    type Error = ConvertError;

    fn try_from(c: char) -> Result<Self> {
        if c.is_ascii() {
            Ok(Delimiter(c as u8))
        } else {
            Err(ConvertError::InvalidDelimiter(c.to_string()))
        }
    }
}

/// Accepts one ASCII character, or `\t` / `tab` for a tab.
impl FromStr for Delimiter {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "\\t" || s.eq_ignore_ascii_case("tab") {
            return Ok(Delimiter(b'\t'));
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Delimiter::try_from(c),
            _ => Err(ConvertError::InvalidDelimiter(s.to_string())),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            b'\t' => f.write_str("\\t"),
            b => write!(f, "{}", b as char),
        }
    }
}

/// The four inputs of a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Delimited UTF-8 source with a header line
    pub source: PathBuf,
    /// JSON output, replaced if it exists
    pub destination: PathBuf,
    pub delimiter: Delimiter,
    /// Header name whose (stripped) cell value keys each row
    pub key_column: String,
}

impl ConvertConfig {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        delimiter: Delimiter,
        key_column: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            delimiter,
            key_column: key_column.into(),
        }
    }
}
