//! Convert a delimited text table into a JSON document keyed by one column.
//!
//! ```no_run
//! use keyedcsv::{convert, ConvertConfig, Delimiter};
//!
//! let cfg = ConvertConfig::new("input.csv", "output.json", Delimiter::SEMICOLON, "id");
//! let summary = convert(&cfg)?;
//! println!("{} rows → {} keys", summary.rows, summary.keys);
//! # Ok::<(), keyedcsv::ConvertError>(())
//! ```

pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod process;
pub mod write;

pub use config::{ConvertConfig, Delimiter};
pub use convert::{convert, ConvertSummary};
pub use document::{KeyedDocument, Row};
pub use error::ConvertError;
pub use process::{load_keyed_csv, read_keyed_document, KeyedTable};
pub use write::write_document;
