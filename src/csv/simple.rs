//! Reduced-capability, decode-only tokenizer
//!
//! One forward scan that toggles an "inside quotes" flag. Quotes open and
//! close spans, delimiters inside a span are data. There is no escape
//! support: a doubled quote inside a span just closes and reopens it, so
//! `"say ""hi"""` decodes to `say hi`. Use [`FieldTokenizer`](super::FieldTokenizer)
//! whenever values may contain the quote character.

/// Lean delimiter/quote tokenizer without doubled-quote escapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleTokenizer {
    delimiter: char,
    quote: char,
}

impl SimpleTokenizer {
    /// Create a tokenizer with custom delimiter and quote character
    pub fn new(delimiter: char, quote: char) -> Self {
        Self { delimiter, quote }
    }

    /// Split a record into field values
    ///
    /// An empty record has no fields. Carriage returns and line feeds are
    /// dropped from field text.
    pub fn parse_line(&self, record: &str) -> Vec<String> {
        let mut fields = Vec::new();
        if record.is_empty() {
            return fields;
        }

        let mut current = String::new();
        let mut in_quotes = false;

        for ch in record.chars() {
            if ch == self.quote {
                in_quotes = !in_quotes;
            } else if ch == self.delimiter && !in_quotes {
                fields.push(std::mem::take(&mut current));
            } else if ch != '\r' && ch != '\n' {
                current.push(ch);
            }
        }

        fields.push(current);
        fields
    }
}
