//! # csvrows
//!
//! Quote-aware CSV decoding into ordered, header-keyed rows and back.
//!
//! ## Features
//!
//! - **Quote-aware tokenizer** - delimiters and doubled quotes inside quoted fields
//! - **Minimal escaping encoder** - quotes only what needs quoting, nulls become `NULL`
//! - **Header mapping** - explicit header row or synthetic `"0"`, `"1"`, ... columns
//! - **Keyed decode** - first-wins index on any column
//! - **Lenient by design** - malformed rows and duplicate keys are skipped, with counters
//!
//! ## Quick Start
//!
//! ```
//! use csvrows::{CsvReader, CsvWriter};
//!
//! let text = "id,name\n1,Alice\n2,\"Bob, Jr.\"";
//!
//! let rows = CsvReader::default().read(text).unwrap();
//! assert_eq!(rows[1].get("name"), Some("Bob, Jr."));
//!
//! let encoded = CsvWriter::default().write(&rows).unwrap();
//! assert_eq!(encoded, text);
//! ```
//!
//! ## Engines
//!
//! [`ParseEngine::Excel`] is the default and the only engine that encodes. It
//! always uses `,` and `"` whatever the [`CsvConfig`] says, and always joins
//! encoded documents with `\n`; the configured line delimiter is honored only
//! when splitting records on decode. Check [`ParseEngine::honors_dialect`],
//! [`CsvConfig::effective_dialect`] or [`CsvConfig::encoding_dialect`].
//! [`ParseEngine::Simple`] honors any dialect but only decodes, and does not
//! understand doubled quotes.
//!
//! ## Known limitations
//!
//! - Records are split on every line delimiter, quoted or not.
//! - The encoder does not quote values containing line breaks.
//! - Header names are neither unquoted on decode nor escaped on encode.

pub mod config;
pub mod csv;
pub mod csv_reader;
pub mod csv_writer;
pub mod engine;
pub mod error;
pub mod index;
pub mod mapper;
pub mod types;

pub use config::{CsvConfig, Dialect};
pub use csv_reader::{CsvReader, CsvRowIterator};
pub use csv_writer::CsvWriter;
pub use engine::ParseEngine;
pub use error::{CsvError, Result};
pub use types::{DecodeStats, Header, KeyedIndex, Record, Row, Table};
