//! Error types for CSV decoding and encoding

use thiserror::Error;

/// Errors surfaced by the reader, writer and engines
///
/// Row shape mismatches, duplicate keys and unbalanced quotes are handled
/// per record and never show up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// The document (or table) is empty while a header row is required
    #[error("Empty input: a header row is required but the document has no records")]
    EmptyInput,

    /// Dialect rejected at configuration time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Operation not implemented by the selected engine
    #[error("{engine} engine does not support {operation}")]
    Unsupported {
        engine: &'static str,
        operation: &'static str,
    },
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, CsvError>;
