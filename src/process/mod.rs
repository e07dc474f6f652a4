// src/process/mod.rs
pub mod utils;

use csv::{ReaderBuilder, StringRecord};
use std::{fs::File, io::Read, path::Path};
use tracing::{debug, trace, warn};

use crate::{
    config::Delimiter,
    document::{row_from_record, KeyedDocument},
    error::{ConvertError, Result},
};
use utils::{clean_str, has_padding};

#[derive(Debug)]
pub struct KeyedTable {
    /// Column names exactly as they appear on the header line (not stripped).
    pub headers: Vec<String>,
    /// Rows keyed by their stripped key-column value.
    pub document: KeyedDocument,
    /// Number of data lines read, duplicates included.
    pub rows: u64,
}

/// Open `path` and read it into a [`KeyedTable`].
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_keyed_csv<P: AsRef<Path>>(
    path: P,
    delimiter: Delimiter,
    key_column: &str,
) -> Result<KeyedTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ConvertError::file_access(path, e))?;
    read_table(file, delimiter, key_column, Some(path))
}

/// Read a header line plus data lines from `reader` and key every row by
/// its `key_column` value.
///
/// - Cell values are stripped of surrounding whitespace; header names are not.
/// - Blank lines are skipped.
/// - A data line with a different field count than the header is an error.
/// - A repeated key replaces the earlier row but keeps its position.
pub fn read_keyed_document<R: Read>(
    reader: R,
    delimiter: Delimiter,
    key_column: &str,
) -> Result<KeyedTable> {
    read_table(reader, delimiter, key_column, None)
}

fn read_table<R: Read>(
    reader: R,
    delimiter: Delimiter,
    key_column: &str,
    path: Option<&Path>,
) -> Result<KeyedTable> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| ConvertError::from_csv(e, path))?
        .iter()
        .map(str::to_string)
        .collect();
    debug!(columns = headers.len(), "read header");

    for name in headers.iter().filter(|h| has_padding(h)) {
        warn!(header = ?name, "header name has surrounding whitespace; it is kept verbatim");
    }

    let mut key_index: Option<usize> = None;
    let mut document = KeyedDocument::new();
    let mut rows = 0u64;
    let mut record = StringRecord::new();
    while rdr
        .read_record(&mut record)
        .map_err(|e| ConvertError::from_csv(e, path))?
    {
        rows += 1;
        let index = match key_index {
            Some(i) => i,
            None => {
                let i = find_key_column(&headers, key_column)?;
                key_index = Some(i);
                i
            }
        };
        let key = clean_str(&record[index]);
        let row = row_from_record(headers.iter().map(String::as_str), record.iter());
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if document.insert(key.clone(), row).is_some() {
            warn!(key = %key, line, "duplicate key; later row replaces earlier one");
        } else {
            trace!(key = %key, line, "row keyed");
        }
    }

    debug!(rows, keys = document.len(), "read data rows");
    Ok(KeyedTable {
        headers,
        document,
        rows,
    })
}

/// Locate `key_column` among the header names.
///
/// With repeated header names the last column is the one a row keeps.
fn find_key_column(headers: &[String], key_column: &str) -> Result<usize> {
    headers
        .iter()
        .rposition(|h| h == key_column)
        .ok_or_else(|| ConvertError::KeyLookup {
            column: key_column.to_string(),
            available: headers.to_vec(),
        })
}
