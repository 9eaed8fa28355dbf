//! Binding of field sequences to named columns
//!
//! Decode side: derive the header from the first record and zip each data
//! record's fields with it. Encode side: track the header line, growing it to
//! the widest row seen.

use crate::csv::strip_line_breaks;
use crate::types::{Header, Record, Row};

/// Derive the header from the first raw record
///
/// With a header row, the record (line breaks stripped) is split on the
/// delimiter as-is: header names are not unquoted. Without one, the header is
/// `"0"`, `"1"`, ... with one name per delimiter-separated part of the first
/// record.
pub fn derive_header(first_record: &str, has_header: bool, delimiter: char) -> Header {
    if has_header {
        let header: Header = strip_line_breaks(first_record)
            .split(delimiter)
            .map(str::to_string)
            .collect();
        if has_duplicates(&header) {
            tracing::debug!(?header, "header repeats a column name, no record can match it");
        }
        header
    } else {
        let width = first_record.split(delimiter).count();
        (0..width).map(|i| i.to_string()).collect()
    }
}

/// Zip a header with a record's fields
///
/// Returns `None` when the field count differs from the header length, or
/// when a repeated header name would leave the row with fewer entries than
/// the header; such records are dropped rather than partially populated.
pub fn map_record(header: &[String], fields: Record) -> Option<Row> {
    if fields.len() != header.len() {
        return None;
    }

    let mut row = Row::with_capacity(header.len());
    for (column, value) in header.iter().zip(fields) {
        row.insert(column.as_str(), value);
    }
    (row.len() == header.len()).then_some(row)
}

/// Header names of a row joined with the delimiter, without escaping
pub fn header_line(row: &Row, delimiter: char) -> String {
    let mut line = String::new();
    for (i, column) in row.columns().enumerate() {
        if i > 0 {
            line.push(delimiter);
        }
        line.push_str(column);
    }
    line
}

fn has_duplicates(header: &[String]) -> bool {
    header
        .iter()
        .enumerate()
        .any(|(i, name)| header[..i].contains(name))
}

/// Header line of a document being encoded
///
/// Starts from the first row's columns. Whenever a later row has strictly
/// more entries than the widest row so far, the line is regenerated from that
/// row's columns and replaces the one already emitted; earlier rows are not
/// re-checked against it. Column names are written raw, so a name holding
/// the delimiter corrupts the header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTracker {
    line: String,
    width: usize,
    enabled: bool,
    delimiter: char,
}

impl HeaderTracker {
    /// Start tracking from the first row of a table
    ///
    /// Without a header row the line stays empty and never grows.
    pub fn new(first_row: &Row, has_header: bool, delimiter: char) -> Self {
        let line = if has_header {
            header_line(first_row, delimiter)
        } else {
            String::new()
        };
        HeaderTracker {
            line,
            width: first_row.len(),
            enabled: has_header,
            delimiter,
        }
    }

    /// Account for one more row; returns `true` when the header grew
    pub fn observe(&mut self, row: &Row) -> bool {
        if !self.enabled || row.len() <= self.width {
            return false;
        }

        let line = header_line(row, self.delimiter);
        tracing::trace!(from = %self.line, to = %line, "header grew");
        self.line = line;
        self.width = row.len();
        true
    }

    /// Current header line (empty without a header row)
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Entry count of the widest row seen
    pub fn width(&self) -> usize {
        self.width
    }

    /// Take the header line
    pub fn into_line(self) -> String {
        self.line
    }
}
