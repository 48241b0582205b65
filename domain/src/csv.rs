//! Line-oriented CSV codec for the submission log.
//!
//! A field is emitted unquoted unless it contains a comma, a double quote,
//! or a line break; if so it is wrapped in double quotes and every internal
//! quote is doubled. Decoding reverses this exactly, so
//! `encode_record(decode_record(line))` is field-wise equal to the original
//! values. The log store relies on this round-trip law.
//!
//! The writer never emits line breaks inside a field: values pass through
//! [`flatten_newlines`] before encoding, which keeps the file strictly
//! line-oriented. The decoder still accepts quoted content defensively.

/// Replace every CR/LF sequence in a value with a single space.
pub fn flatten_newlines(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Encode a single field per the quoting rule.
pub fn encode_field(value: &str) -> String {
    if value.contains(['"', ',', '\n', '\r']) {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('"');
        for c in value.chars() {
            if c == '"' {
                out.push('"');
            }
            out.push(c);
        }
        out.push('"');
        out
    } else {
        value.to_string()
    }
}

/// Encode a full record as one CSV line (without the trailing newline).
pub fn encode_record(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| encode_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Decode one CSV line into its field values.
///
/// Outside quotes a comma separates fields; inside quotes a doubled quote
/// is an escaped quote and a single quote ends quoted mode. An unmatched
/// trailing quote simply closes the field.
pub fn decode_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(values: &[&str]) {
        let fields: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let line = encode_record(&fields);
        assert_eq!(decode_record(&line), fields, "line was: {line}");
    }

    #[test]
    fn test_plain_values_stay_unquoted() {
        assert_eq!(encode_field("hello"), "hello");
        assert_eq!(encode_record(&["a".into(), "b".into()]), "a,b");
    }

    #[test]
    fn test_commas_force_quoting() {
        assert_eq!(encode_field("a,b"), "\"a,b\"");
        round_trip(&["a,b", "plain", ""]);
    }

    #[test]
    fn test_quotes_are_doubled() {
        assert_eq!(encode_field("he said \"hi\""), "\"he said \"\"hi\"\"\"");
        round_trip(&["he said \"hi\"", "x"]);
    }

    #[test]
    fn test_empty_fields_round_trip() {
        round_trip(&["", "", ""]);
        assert_eq!(decode_record(",,"), vec!["", "", ""]);
    }

    #[test]
    fn test_mixed_record_round_trips() {
        round_trip(&["2025-01-01T00:00:00Z", "1.2.3.4", "a,b", "95", "\"\"", "x y z"]);
    }

    #[test]
    fn test_decoder_accepts_fully_quoted_lines() {
        // Some earlier log writers quoted every field unconditionally.
        let line = "\"2025-01-01\",\"user\",\"a,b\",\"he said \"\"hi\"\"\"";
        assert_eq!(
            decode_record(line),
            vec!["2025-01-01", "user", "a,b", "he said \"hi\""]
        );
    }

    #[test]
    fn test_decoder_accepts_quoted_newline() {
        let line = "\"line1\nline2\",next";
        assert_eq!(decode_record(line), vec!["line1\nline2", "next"]);
    }

    #[test]
    fn test_flatten_newlines() {
        assert_eq!(flatten_newlines("a\nb"), "a b");
        assert_eq!(flatten_newlines("a\r\nb\rc"), "a b c");
        assert_eq!(flatten_newlines("plain"), "plain");
    }
}
