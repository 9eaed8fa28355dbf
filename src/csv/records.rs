//! Record-level splitting and document assembly

/// Split a document into raw records on every occurrence of `line_delimiter`
///
/// This level is not quote-aware: a line delimiter inside a quoted field still
/// ends the record. Documents are expected never to carry the line delimiter
/// except between records. A trailing delimiter yields a final empty record.
pub fn split_records(text: &str, line_delimiter: char) -> Vec<&str> {
    text.split(line_delimiter).collect()
}

/// Join record lines with `line_delimiter`, leaving out empty lines
///
/// Only truly empty strings are dropped. A row whose fields are all empty
/// still encodes to delimiters (`",,"`) and survives, but a single-column row
/// with an empty value vanishes from the output.
pub fn join_records<S: AsRef<str>>(lines: &[S], line_delimiter: char) -> String {
    let mut out = String::new();

    for line in lines {
        let line: &str = line.as_ref();
        if line.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(line_delimiter);
        }
        out.push_str(line);
    }
    out
}

/// Remove every carriage return and line feed
pub(crate) fn strip_line_breaks(s: &str) -> String {
    s.chars().filter(|&c| c != '\r' && c != '\n').collect()
}

/// Whether `s` is empty once carriage returns and line feeds are ignored
pub(crate) fn is_blank_record(s: &str) -> bool {
    s.chars().all(|c| c == '\r' || c == '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(split_records("a,b\n1,2", '\n'), vec!["a,b", "1,2"]);
    }

    #[test]
    fn test_split_trailing_delimiter() {
        assert_eq!(split_records("a\nb\n", '\n'), vec!["a", "b", ""]);
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(split_records("", '\n'), vec![""]);
    }

    #[test]
    fn test_split_ignores_quotes() {
        assert_eq!(
            split_records("\"Line 1\nLine 2\",x", '\n'),
            vec!["\"Line 1", "Line 2\",x"]
        );
    }

    #[test]
    fn test_split_keeps_carriage_returns() {
        assert_eq!(split_records("a\r\nb", '\n'), vec!["a\r", "b"]);
    }

    #[test]
    fn test_join_skips_empty_lines() {
        assert_eq!(join_records(&["a,b", "", "1,2", ",,"], '\n'), "a,b\n1,2\n,,");
    }

    #[test]
    fn test_join_leading_empty() {
        assert_eq!(join_records(&["", "1"], '\n'), "1");
        assert_eq!(join_records::<&str>(&[], '\n'), "");
    }

    #[test]
    fn test_blank_record() {
        assert!(is_blank_record(""));
        assert!(is_blank_record("\r\n"));
        assert!(!is_blank_record(" "));
        assert_eq!(strip_line_breaks("a\r\nb"), "ab");
    }
}
