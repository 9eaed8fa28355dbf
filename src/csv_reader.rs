//! Decoding CSV text into header-keyed rows

use crate::config::{CsvConfig, Dialect};
use crate::csv::is_blank_record;
use crate::engine::ParseEngine;
use crate::error::{CsvError, Result};
use crate::index::build_keyed_index;
use crate::mapper::{derive_header, map_record};
use crate::types::{DecodeStats, Header, KeyedIndex, Row, Table};

/// CSV decoder producing ordered rows or a keyed index
///
/// Records whose field count differs from the header are dropped silently,
/// and on keyed decode later rows repeating a key are dropped silently. The
/// `*_with_stats` variants report how many of each were dropped.
///
/// # Examples
///
/// ```
/// use csvrows::CsvReader;
///
/// let reader = CsvReader::default();
/// let rows = reader.read("id,name\n1,Alice\n2,\"Bob, Jr.\"\n").unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].get("name"), Some("Bob, Jr."));
/// ```
///
/// # Keyed
///
/// ```
/// use csvrows::CsvReader;
///
/// let reader = CsvReader::default();
/// let by_id = reader.read_keyed("id,name\n1,Alice\n2,Bob\n", "id").unwrap();
///
/// assert_eq!(by_id["2"].get("name"), Some("Bob"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    config: CsvConfig,
}

impl CsvReader {
    /// Create a reader, rejecting an invalid dialect up front
    pub fn new(config: CsvConfig) -> Result<Self> {
        config.validate()?;
        Ok(CsvReader { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// Iterate the rows of a document lazily
    ///
    /// The header is derived eagerly; each data record is tokenized when the
    /// iterator reaches it.
    pub fn rows<'a>(&self, text: &'a str) -> Result<CsvRowIterator<'a>> {
        if self.config.has_header && text.trim().is_empty() {
            return Err(CsvError::EmptyInput);
        }
        let dialect = self.config.effective_dialect();
        self.config.warn_if_overridden(dialect);

        let engine = self.config.engine;
        let mut records = engine
            .extract_records(dialect.line_delimiter, text)
            .into_iter();

        let header = match records.as_slice().first() {
            Some(first) => derive_header(first, self.config.has_header, dialect.delimiter),
            None => return Err(CsvError::EmptyInput),
        };
        if self.config.has_header {
            records.next();
        }

        Ok(CsvRowIterator {
            records,
            header,
            engine,
            dialect,
            position: usize::from(self.config.has_header),
            stats: DecodeStats::default(),
        })
    }

    /// Decode a document into rows
    pub fn read(&self, text: &str) -> Result<Table> {
        Ok(self.rows(text)?.collect())
    }

    /// Decode a document into rows, reporting dropped records
    pub fn read_with_stats(&self, text: &str) -> Result<(Table, DecodeStats)> {
        let mut iter = self.rows(text)?;
        let table: Table = iter.by_ref().collect();
        Ok((table, iter.stats()))
    }

    /// Decode a document into a first-wins index on the `key` column
    pub fn read_keyed(&self, text: &str, key: &str) -> Result<KeyedIndex> {
        Ok(self.read_keyed_with_stats(text, key)?.0)
    }

    /// Decode a document into a first-wins index, reporting dropped rows
    pub fn read_keyed_with_stats(
        &self,
        text: &str,
        key: &str,
    ) -> Result<(KeyedIndex, DecodeStats)> {
        let mut iter = self.rows(text)?;
        let build = build_keyed_index(iter.by_ref(), key);

        let mut stats = iter.stats();
        stats.duplicate_keys = build.duplicate_keys;
        Ok((build.index, stats))
    }

    /// Header a document would be decoded with
    pub fn read_header(&self, text: &str) -> Result<Header> {
        Ok(self.rows(text)?.header().to_vec())
    }
}

/// Iterator over the decoded rows of one document
pub struct CsvRowIterator<'a> {
    records: std::vec::IntoIter<&'a str>,
    header: Header,
    engine: ParseEngine,
    dialect: Dialect,
    position: usize,
    stats: DecodeStats,
}

impl CsvRowIterator<'_> {
    /// Header the rows are bound to
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Counters for the records consumed so far
    pub fn stats(&self) -> DecodeStats {
        self.stats
    }
}

impl Iterator for CsvRowIterator<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        for record in self.records.by_ref() {
            let position = self.position;
            self.position += 1;

            if is_blank_record(record) {
                continue;
            }
            self.stats.records += 1;

            let parsed = self
                .engine
                .extract_fields(self.dialect.delimiter, self.dialect.quote, record);
            if parsed.unterminated_quote {
                self.stats.malformed_records += 1;
            }

            let width = parsed.fields.len();
            match map_record(&self.header, parsed.fields) {
                Some(row) => {
                    self.stats.rows += 1;
                    return Some(row);
                }
                None => {
                    tracing::debug!(
                        record = position,
                        expected = self.header.len(),
                        actual = width,
                        "field count does not match header, skipping record"
                    );
                    self.stats.skipped_rows += 1;
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_read_with_header() -> Result<()> {
        let rows = CsvReader::default().read("id,name\n1,Alice\n2,\"Bob, Jr.\"\n")?;
        assert_eq!(
            rows,
            vec![
                row(&[("id", "1"), ("name", "Alice")]),
                row(&[("id", "2"), ("name", "Bob, Jr.")]),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_read_crlf() -> Result<()> {
        let rows = CsvReader::default().read("id,name\r\n1,Alice\r\n")?;
        assert_eq!(rows, vec![row(&[("id", "1"), ("name", "Alice")])]);
        Ok(())
    }

    #[test]
    fn test_empty_input_with_header() {
        let reader = CsvReader::default();
        assert_eq!(reader.read(""), Err(CsvError::EmptyInput));
        assert_eq!(reader.read(" \n\t"), Err(CsvError::EmptyInput));
        assert_eq!(reader.read_keyed("", "id"), Err(CsvError::EmptyInput));
    }

    #[test]
    fn test_empty_input_without_header() -> Result<()> {
        let reader = CsvReader::new(CsvConfig::new().has_header(false))?;
        assert!(reader.read("")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_header_only() -> Result<()> {
        let (rows, stats) = CsvReader::default().read_with_stats("a,b\n")?;
        assert!(rows.is_empty());
        assert_eq!(stats, DecodeStats::default());
        Ok(())
    }

    #[test]
    fn test_stats_count_skipped_rows() -> Result<()> {
        let text = "a,b\n1,2\n1,2,3\n4\n\"x,5,6\n6,7\n";
        let (rows, stats) = CsvReader::default().read_with_stats(text)?;
        assert_eq!(
            rows,
            vec![row(&[("a", "1"), ("b", "2")]), row(&[("a", "6"), ("b", "7")])]
        );
        assert_eq!(stats.records, 5);
        assert_eq!(stats.rows, 2);
        assert_eq!(stats.skipped_rows, 3);
        assert_eq!(stats.malformed_records, 1);
        Ok(())
    }

    #[test]
    fn test_keyed_stats() -> Result<()> {
        let text = "id,name\n1,Alice\n2,Bob\n1,Carol\n";
        let (index, stats) = CsvReader::default().read_keyed_with_stats(text, "id")?;
        assert_eq!(index.len(), 2);
        assert_eq!(index["1"].get("name"), Some("Alice"));
        assert_eq!(stats.duplicate_keys, 1);
        assert_eq!(stats.rows, 3);
        Ok(())
    }

    #[test]
    fn test_keyed_unknown_column() -> Result<()> {
        let index = CsvReader::default().read_keyed("id,name\n1,Alice\n", "email")?;
        assert!(index.is_empty());
        Ok(())
    }

    #[test]
    fn test_lazy_rows() -> Result<()> {
        let reader = CsvReader::default();
        let mut iter = reader.rows("a\n1\n2\n3")?;
        assert_eq!(iter.header(), ["a"]);
        assert_eq!(iter.next(), Some(row(&[("a", "1")])));
        assert_eq!(iter.stats().rows, 1);
        assert_eq!(iter.count(), 2);
        Ok(())
    }

    #[test]
    fn test_read_header() -> Result<()> {
        let reader = CsvReader::new(CsvConfig::new().has_header(false))?;
        assert_eq!(reader.read_header("x,y\n")?, vec!["0", "1"]);
        Ok(())
    }

    #[test]
    fn test_excel_engine_ignores_custom_delimiter() -> Result<()> {
        let reader = CsvReader::new(CsvConfig::new().delimiter(';'))?;
        let rows = reader.read("a,b\n1,2\n")?;
        assert_eq!(rows, vec![row(&[("a", "1"), ("b", "2")])]);
        Ok(())
    }

    #[test]
    fn test_excel_engine_splits_on_configured_line_delimiter() -> Result<()> {
        let reader = CsvReader::new(CsvConfig::new().line_delimiter('|'))?;
        assert_eq!(reader.read_header("a,b|1,2|3,4")?, vec!["a", "b"]);
        assert_eq!(
            reader.read("a,b|1,2|3,4")?,
            vec![row(&[("a", "1"), ("b", "2")]), row(&[("a", "3"), ("b", "4")])]
        );
        Ok(())
    }

    #[test]
    fn test_duplicate_header_names_drop_rows() -> Result<()> {
        let (rows, stats) = CsvReader::default().read_with_stats("a,a\n1,2\n")?;
        assert!(rows.is_empty());
        assert_eq!(stats.records, 1);
        assert_eq!(stats.skipped_rows, 1);
        Ok(())
    }

    #[test]
    fn test_simple_engine_custom_dialect() -> Result<()> {
        let config = CsvConfig::new()
            .engine(ParseEngine::Simple)
            .delimiter(';')
            .line_delimiter('|');
        let rows = CsvReader::new(config)?.read("a;b|1;'x'|2;\"y;z\"")?;
        assert_eq!(
            rows,
            vec![row(&[("a", "1"), ("b", "'x'")]), row(&[("a", "2"), ("b", "y;z")])]
        );
        Ok(())
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = CsvReader::new(CsvConfig::new().quote_char(',')).unwrap_err();
        assert!(matches!(err, CsvError::InvalidConfig(_)));
    }
}
