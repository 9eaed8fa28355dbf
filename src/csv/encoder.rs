//! Field escaping and record building

/// Text written for a null field
pub const NULL_FIELD: &str = "NULL";

/// CSV encoder for escaping field values into record text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEncoder {
    delimiter: char,
    quote: char,
}

impl FieldEncoder {
    /// Create a new encoder with custom delimiter and quote character
    pub fn new(delimiter: char, quote: char) -> Self {
        Self { delimiter, quote }
    }

    /// Encode an entire record into buffer, fields joined by the delimiter
    pub fn encode_row<'a, I>(&self, fields: I, buffer: &mut String)
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        for (i, field) in fields.into_iter().enumerate() {
            if i > 0 {
                buffer.push(self.delimiter);
            }
            self.encode_field(field, buffer);
        }
    }

    /// Encode an entire record into a new string
    pub fn build_record<'a, I>(&self, fields: I) -> String
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut buffer = String::new();
        self.encode_row(fields, &mut buffer);
        buffer
    }

    /// Escaped text for a single field
    pub fn escape(&self, field: Option<&str>) -> String {
        let mut buffer = String::new();
        self.encode_field(field, &mut buffer);
        buffer
    }

    /// Encode single field with quoting/escaping
    ///
    /// Null becomes `NULL`. Quote characters are doubled, and the value is
    /// wrapped in quotes when it holds a quote or the delimiter.
    pub fn encode_field(&self, field: Option<&str>, buffer: &mut String) {
        let Some(field) = field else {
            buffer.push_str(NULL_FIELD);
            return;
        };

        if self.needs_quoting(field) {
            buffer.push(self.quote);
            for ch in field.chars() {
                if ch == self.quote {
                    // Escape quotes by doubling: " -> ""
                    buffer.push(self.quote);
                    buffer.push(self.quote);
                } else {
                    buffer.push(ch);
                }
            }
            buffer.push(self.quote);
        } else {
            buffer.push_str(field);
        }
    }

    /// Check if field requires quoting
    ///
    /// Line breaks do not trigger quoting. A value holding the line delimiter
    /// but no quote or delimiter is written bare and will split its record
    /// when the document is read back.
    fn needs_quoting(&self, field: &str) -> bool {
        field.contains(|c: char| c == self.delimiter || c == self.quote)
    }
}

impl Default for FieldEncoder {
    fn default() -> Self {
        Self::new(',', '"')
    }
}
