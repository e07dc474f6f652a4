use serde::{Deserialize, Serialize};
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};

use crate::{error::Result, process::utils::clean_str};

/// One source line: header name → stripped cell text, in header order.
pub type Row = Map<String, Value>;

const INDENT: &[u8] = b"    ";

/// Key → row mapping, in first-seen key order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyedDocument {
    entries: Map<String, Value>,
}

impl KeyedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `row` under `key`.
    ///
    /// An existing key keeps its position and gets the new row; the previous
    /// row is returned.
    pub fn insert(&mut self, key: String, row: Row) -> Option<Row> {
        match self.entries.insert(key, Value::Object(row)) {
            Some(Value::Object(prev)) => Some(prev),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Row> {
        self.entries.get(key).and_then(Value::as_object)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Render as JSON with 4-space indentation and no trailing newline.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}

/// Build a row from parallel header/value slices, stripping every value.
pub fn row_from_record<'a, H, V>(headers: H, values: V) -> Row
where
    H: IntoIterator<Item = &'a str>,
    V: IntoIterator<Item = &'a str>,
{
    headers
        .into_iter()
        .zip(values)
        .map(|(h, v)| (h.to_string(), Value::String(clean_str(v))))
        .collect()
}
