//! Error types for table-to-document conversion

use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors that can occur while converting a delimited file into a keyed document
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Source could not be opened/read, or destination could not be written
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source bytes are not valid UTF-8
    #[error("invalid UTF-8 in source at line {line}")]
    Decoding { line: u64 },

    /// A data line does not have the same number of fields as the header
    #[error("line {line} has {found} fields, header defines {expected}")]
    Parse {
        line: u64,
        expected: u64,
        found: u64,
    },

    /// Key column does not name any header field
    #[error("key column {column:?} not found in header {available:?}")]
    KeyLookup {
        column: String,
        available: Vec<String>,
    },

    /// Delimiter is not a single byte
    #[error("invalid delimiter {0:?}: expected a single ASCII character")]
    InvalidDelimiter(String),

    /// Rendering the document as JSON failed
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Any other failure reported by the delimited-text reader
    #[error("CSV error: {0}")]
    Csv(#[source] csv::Error),
}

impl ConvertError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Map a reader error onto the conversion taxonomy.
    ///
    /// `path` is attached to I/O failures so the message names the source file.
    pub(crate) fn from_csv(err: csv::Error, path: Option<&Path>) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or_default();
        let mapped = match err.kind() {
            csv::ErrorKind::Io(e) => Some(ConvertError::FileAccess {
                path: path.map(Path::to_path_buf).unwrap_or_default(),
                source: io::Error::new(e.kind(), e.to_string()),
            }),
            csv::ErrorKind::Utf8 { pos, .. } => Some(ConvertError::Decoding {
                line: pos.as_ref().map(|p| p.line()).unwrap_or(line),
            }),
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => Some(ConvertError::Parse {
                line: pos.as_ref().map(|p| p.line()).unwrap_or(line),
                expected: *expected_len,
                found: *len,
            }),
            _ => None,
        };
        mapped.unwrap_or(ConvertError::Csv(err))
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_lookup_message_lists_header() {
        let err = ConvertError::KeyLookup {
            column: "id".to_string(),
            available: vec!["ID".to_string(), "name".to_string()],
        };
        assert_eq!(
            err.to_string(),
            r#"key column "id" not found in header ["ID", "name"]"#
        );
    }

    #[test]
    fn test_reader_error_keeps_source() {
        use std::error::Error as _;

        let err = ConvertError::Csv(csv::Error::from(io::Error::new(
            io::ErrorKind::Other,
            "seek failed",
        )));
        let source = err.source().expect("reader error is chained");
        assert!(source.to_string().contains("seek failed"));
    }

    #[test]
    fn test_ragged_row_maps_to_parse_error() {
        let data = "a,b\n1,2\n3\n";
        let mut rdr = csv::ReaderBuilder::new().from_reader(data.as_bytes());
        let err = rdr
            .records()
            .find_map(|r| r.err())
            .expect("ragged row must fail");

        match ConvertError::from_csv(err, None) {
            ConvertError::Parse {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
