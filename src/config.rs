//! Dialect and parser configuration

use crate::engine::ParseEngine;
use crate::error::{CsvError, Result};

/// Default record (line) delimiter
pub const DEFAULT_LINE_DELIMITER: char = '\n';
/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';
/// Default quote character
pub const DEFAULT_QUOTE: char = '"';

/// The three structural characters of a CSV document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dialect {
    /// Separates records
    pub line_delimiter: char,
    /// Separates fields within a record
    pub delimiter: char,
    /// Wraps fields that contain the delimiter or the quote itself
    pub quote: char,
}

impl Dialect {
    /// Fixed dialect of the Excel engine: `\n`, `,` and `"`
    pub const EXCEL: Dialect = Dialect {
        line_delimiter: DEFAULT_LINE_DELIMITER,
        delimiter: DEFAULT_DELIMITER,
        quote: DEFAULT_QUOTE,
    };

    /// Create a dialect from explicit characters
    pub fn new(line_delimiter: char, delimiter: char, quote: char) -> Self {
        Dialect {
            line_delimiter,
            delimiter,
            quote,
        }
    }

    /// Check that every role uses a distinct, usable character
    ///
    /// Carriage returns and line feeds are stripped from field text, so they
    /// can never act as the field delimiter or the quote.
    pub fn validate(&self) -> Result<()> {
        for (role, ch) in [("delimiter", self.delimiter), ("quote", self.quote)] {
            if ch == '\n' || ch == '\r' {
                return Err(CsvError::InvalidConfig(format!(
                    "{} cannot be a line terminator ({:?})",
                    role, ch
                )));
            }
        }

        let roles = [
            ("line delimiter", self.line_delimiter),
            ("delimiter", self.delimiter),
            ("quote", self.quote),
        ];
        for (i, (a, ca)) in roles.iter().enumerate() {
            for (b, cb) in &roles[i + 1..] {
                if ca == cb {
                    return Err(CsvError::InvalidConfig(format!(
                        "{} and {} are both {:?}",
                        a, b, ca
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::EXCEL
    }
}

/// Configuration shared by [`CsvReader`](crate::CsvReader) and [`CsvWriter`](crate::CsvWriter)
///
/// # Examples
///
/// ```
/// use csvrows::{CsvConfig, ParseEngine};
///
/// let config = CsvConfig::new()
///     .delimiter(';')
///     .has_header(false)
///     .engine(ParseEngine::Simple);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CsvConfig {
    /// Structural characters requested by the caller
    pub dialect: Dialect,
    /// Whether the first record names the columns
    pub has_header: bool,
    /// Tokenizer/encoder strategy
    pub engine: ParseEngine,
}

impl Default for CsvConfig {
    fn default() -> Self {
        CsvConfig {
            dialect: Dialect::default(),
            has_header: true,
            engine: ParseEngine::default(),
        }
    }
}

impl CsvConfig {
    /// Default configuration: `\n`, `,`, `"`, header row on, Excel engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the record delimiter (builder pattern)
    pub fn line_delimiter(mut self, ch: char) -> Self {
        self.dialect.line_delimiter = ch;
        self
    }

    /// Set the field delimiter (builder pattern)
    ///
    /// Ignored by [`ParseEngine::Excel`], which always uses `,`.
    pub fn delimiter(mut self, ch: char) -> Self {
        self.dialect.delimiter = ch;
        self
    }

    /// Set the quote character (builder pattern)
    ///
    /// Ignored by [`ParseEngine::Excel`], which always uses `"`.
    pub fn quote_char(mut self, ch: char) -> Self {
        self.dialect.quote = ch;
        self
    }

    /// Indicate whether the first record is a header row (builder pattern)
    pub fn has_header(mut self, has: bool) -> Self {
        self.has_header = has;
        self
    }

    /// Select the engine (builder pattern)
    pub fn engine(mut self, engine: ParseEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Validate the dialect
    pub fn validate(&self) -> Result<()> {
        self.dialect.validate()
    }

    /// Dialect the selected engine will actually decode with
    pub fn effective_dialect(&self) -> Dialect {
        self.engine.effective_dialect(self.dialect)
    }

    /// Dialect the selected engine will actually encode with
    pub fn encoding_dialect(&self) -> Dialect {
        self.engine.encoding_dialect(self.dialect)
    }

    /// Warn when the engine is going to ignore part of the configured dialect
    pub(crate) fn warn_if_overridden(&self, effective: Dialect) {
        if effective != self.dialect {
            tracing::warn!(
                engine = self.engine.name(),
                requested = ?self.dialect,
                effective = ?effective,
                "engine ignores configured dialect"
            );
        }
    }
}
