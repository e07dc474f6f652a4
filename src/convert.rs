use std::time::Instant;
use tracing::info;

use crate::{config::ConvertConfig, error::Result, process::load_keyed_csv, write::write_document};

/// Counts reported by a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Data lines read from the source
    pub rows: u64,
    /// Distinct keys written to the destination
    pub keys: u64,
    /// Size of the written JSON
    pub bytes: u64,
}

/// Convert `config.source` into a keyed JSON document at `config.destination`.
///
/// The destination is only touched once the whole source has been read and
/// keyed, so any read failure leaves it untouched (or absent).
#[tracing::instrument(
    level = "info",
    skip(config),
    fields(source = %config.source.display(), key = %config.key_column)
)]
pub fn convert(config: &ConvertConfig) -> Result<ConvertSummary> {
    let start = Instant::now();
    info!(delimiter = %config.delimiter, "starting conversion");

    let table = load_keyed_csv(&config.source, config.delimiter, &config.key_column)?;
    let bytes = write_document(&config.destination, &table.document)?;

    let summary = ConvertSummary {
        rows: table.rows,
        keys: table.document.len() as u64,
        bytes,
    };
    info!(
        rows = summary.rows,
        keys = summary.keys,
        bytes = summary.bytes,
        destination = %config.destination.display(),
        elapsed = ?start.elapsed(),
        "conversion complete"
    );
    Ok(summary)
}
