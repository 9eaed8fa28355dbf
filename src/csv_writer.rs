//! Encoding header-keyed rows into CSV text

use crate::config::CsvConfig;
use crate::error::{CsvError, Result};
use crate::mapper::HeaderTracker;
use crate::types::Row;

/// CSV encoder turning rows into one text blob
///
/// The header line comes from the first row's column names and is replaced
/// whenever a later row has more entries, so it always names the widest row
/// seen. Each row's values are written in that row's own column order. Null
/// values are written as `NULL`. Record lines that encode to an empty string
/// are left out of the document.
///
/// # Examples
///
/// ```
/// use csvrows::{CsvWriter, Row};
///
/// let rows: Vec<Row> = vec![
///     [("id", "1"), ("name", "Alice")].into_iter().collect(),
///     [("id", "2"), ("name", "Bob, Jr.")].into_iter().collect(),
/// ];
///
/// let text = CsvWriter::default().write(&rows).unwrap();
/// assert_eq!(text, "id,name\n1,Alice\n2,\"Bob, Jr.\"");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvWriter {
    config: CsvConfig,
}

impl CsvWriter {
    /// Create a writer, rejecting an invalid dialect or a decode-only engine
    pub fn new(config: CsvConfig) -> Result<Self> {
        config.validate()?;
        if !config.engine.supports_encoding() {
            return Err(CsvError::Unsupported {
                engine: config.engine.name(),
                operation: "encoding",
            });
        }
        Ok(CsvWriter { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// Encode a single row's values as one record line
    pub fn write_row(&self, row: &Row) -> Result<String> {
        let dialect = self.config.encoding_dialect();
        self.config
            .engine
            .build_record(row.values(), dialect.delimiter, dialect.quote)
    }

    /// Encode rows into a document
    ///
    /// An empty table is an error with a header row (there is nothing to
    /// name the columns from) and encodes to `""` without one.
    pub fn write<'a, I>(&self, rows: I) -> Result<String>
    where
        I: IntoIterator<Item = &'a Row>,
    {
        let mut rows = rows.into_iter().peekable();
        let Some(first) = rows.peek() else {
            return if self.config.has_header {
                Err(CsvError::EmptyInput)
            } else {
                Ok(String::new())
            };
        };

        let dialect = self.config.encoding_dialect();
        self.config.warn_if_overridden(dialect);
        let mut header = HeaderTracker::new(first, self.config.has_header, dialect.delimiter);

        // Slot 0 holds the header line until every row has been seen
        let mut lines = vec![String::new()];
        for row in rows {
            lines.push(self.write_row(row)?);
            header.observe(row);
        }
        lines[0] = header.into_line();

        self.config
            .engine
            .build_document(&lines, dialect.line_delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ParseEngine;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_plain_csv() -> Result<()> {
        let rows = vec![
            row(&[("Name", "Alice"), ("Age", "30"), ("City", "NYC")]),
            row(&[("Name", "Bob"), ("Age", "25"), ("City", "SF")]),
        ];
        let text = CsvWriter::default().write(&rows)?;
        assert_eq!(text, "Name,Age,City\nAlice,30,NYC\nBob,25,SF");
        Ok(())
    }

    #[test]
    fn test_null_values() -> Result<()> {
        let mut r = row(&[("id", "1")]);
        r.insert_null("x");
        assert_eq!(CsvWriter::default().write_row(&r)?, "1,NULL");
        Ok(())
    }

    #[test]
    fn test_edge_cases() -> Result<()> {
        let rows = vec![row(&[("a", "a,b"), ("b", r#"Say "Hi""#)])];
        let text = CsvWriter::default().write(&rows)?;
        assert_eq!(text, "a,b\n\"a,b\",\"Say \"\"Hi\"\"\"");
        Ok(())
    }

    #[test]
    fn test_header_grows() -> Result<()> {
        let rows = vec![row(&[("a", "1")]), row(&[("a", "2"), ("b", "3")])];
        let text = CsvWriter::default().write(&rows)?;
        assert_eq!(text, "a,b\n1\n2,3");
        Ok(())
    }

    #[test]
    fn test_no_header() -> Result<()> {
        let writer = CsvWriter::new(CsvConfig::new().has_header(false))?;
        let rows = vec![row(&[("0", "1"), ("1", "2")]), row(&[("0", "3"), ("1", "4")])];
        assert_eq!(writer.write(&rows)?, "1,2\n3,4");

        let empty: Vec<Row> = Vec::new();
        assert_eq!(writer.write(&empty)?, "");
        Ok(())
    }

    #[test]
    fn test_empty_table_with_header() {
        let empty: Vec<Row> = Vec::new();
        assert_eq!(CsvWriter::default().write(&empty), Err(CsvError::EmptyInput));
    }

    #[test]
    fn test_empty_single_column_row_vanishes() -> Result<()> {
        let rows = vec![row(&[("a", "1")]), row(&[("a", "")]), row(&[("a", "2")])];
        assert_eq!(CsvWriter::default().write(&rows)?, "a\n1\n2");
        Ok(())
    }

    #[test]
    fn test_all_empty_row_survives() -> Result<()> {
        let rows = vec![row(&[("a", ""), ("b", "")])];
        assert_eq!(CsvWriter::default().write(&rows)?, "a,b\n,");
        Ok(())
    }

    #[test]
    fn test_decode_only_engine_rejected() {
        let err = CsvWriter::new(CsvConfig::new().engine(ParseEngine::Simple)).unwrap_err();
        assert!(matches!(err, CsvError::Unsupported { engine: "simple", .. }));
    }

    #[test]
    fn test_excel_engine_ignores_custom_dialect() -> Result<()> {
        let writer = CsvWriter::new(CsvConfig::new().delimiter(';').line_delimiter('|'))?;
        let rows = vec![row(&[("a", "x;y"), ("b", "z")])];
        assert_eq!(writer.write(&rows)?, "a,b\nx;y,z");
        Ok(())
    }
}
