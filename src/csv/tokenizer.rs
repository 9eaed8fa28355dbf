//! Full-fidelity field tokenizer
//!
//! Every raw part of a record is first made uniformly quoted, then a single
//! scanner extracts the quoted spans. A part that carries the delimiter as
//! data was quoted by whoever produced it, and an unquoted part cannot legally
//! contain the quote character, so wrapping every quote-free part that is not
//! the continuation of an open quoted field is enough to make the delimiter
//! irrelevant to the scan.

use super::records::is_blank_record;
use crate::types::Record;

/// Fields extracted from one record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecord {
    /// Decoded field values in order
    pub fields: Record,
    /// The record ended inside a quoted span
    ///
    /// The remainder after the unmatched opening quote was kept as a final
    /// field. Tokenization of such records is best-effort.
    pub unterminated_quote: bool,
}

/// Quote-aware tokenizer supporting doubled-quote escapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTokenizer {
    delimiter: char,
    quote: char,
}

impl FieldTokenizer {
    /// Create a tokenizer with custom delimiter and quote character
    pub fn new(delimiter: char, quote: char) -> Self {
        Self { delimiter, quote }
    }

    /// Split a record into decoded field values
    pub fn parse_line(&self, record: &str) -> Record {
        self.parse_record(record).fields
    }

    /// Split a record into decoded field values, reporting unbalanced quoting
    ///
    /// A record that is empty once carriage returns and line feeds are
    /// ignored has no fields at all. Quoted empty bodies become empty fields.
    pub fn parse_record(&self, record: &str) -> ParsedRecord {
        if is_blank_record(record) {
            return ParsedRecord::default();
        }

        let uniform = self.quote_all_parts(record);
        self.scan_quoted_spans(&uniform)
    }

    /// Wrap every delimiter-separated part that has no quote character in quotes
    ///
    /// Parts that sit inside a quoted field spanning several delimiters (odd
    /// number of quotes seen so far) are left alone.
    fn quote_all_parts(&self, record: &str) -> String {
        let mut out = String::with_capacity(record.len() + 16);
        let mut inside_field = false;

        for (i, part) in record.split(self.delimiter).enumerate() {
            if i > 0 {
                out.push(self.delimiter);
            }

            let quotes = part.matches(self.quote).count();
            if quotes == 0 && !inside_field {
                out.push(self.quote);
                out.push_str(part);
                out.push(self.quote);
            } else {
                out.push_str(part);
            }
            if quotes % 2 == 1 {
                inside_field = !inside_field;
            }
        }
        out
    }

    /// Extract each `quote (non-quote | quote quote)* quote` span, unescaped
    fn scan_quoted_spans(&self, text: &str) -> ParsedRecord {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut span_start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            if !in_quotes {
                // Text between spans is only delimiters, or junk in malformed input
                if ch == self.quote {
                    in_quotes = true;
                    span_start = pos;
                }
                continue;
            }

            if ch == self.quote {
                if matches!(chars.peek(), Some(&(_, next)) if next == self.quote) {
                    // Doubled quote is one literal quote
                    current.push(self.quote);
                    chars.next();
                } else {
                    in_quotes = false;
                    fields.push(std::mem::take(&mut current));
                }
            } else if ch != '\r' && ch != '\n' {
                current.push(ch);
            }
        }

        if in_quotes {
            tracing::debug!(
                offset = span_start,
                "unterminated quoted span, keeping remainder as last field"
            );
            fields.push(current);
        }

        ParsedRecord {
            fields,
            unterminated_quote: in_quotes,
        }
    }
}

impl Default for FieldTokenizer {
    fn default() -> Self {
        Self::new(',', '"')
    }
}
