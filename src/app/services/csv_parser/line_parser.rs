//! Single-line field splitting and encoding
//!
//! A `"` toggles quoted mode. Inside quotes a comma is literal and `""` is an
//! escaped quote; outside quotes a comma ends the field.

const QUOTE: char = '"';
const DELIMITER: char = ',';

/// Split one CSV line into its fields
///
/// Always yields at least one field; an empty line yields a single empty
/// field.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            QUOTE if in_quotes && chars.peek() == Some(&QUOTE) => {
                current.push(QUOTE);
                chars.next();
            }
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}

/// Encode one field, quoting it when it contains a delimiter, quote or newline
pub fn encode_field(value: &str) -> String {
    if value.contains([DELIMITER, QUOTE, '\n']) {
        format!("\"{}\"", value.replace(QUOTE, "\"\""))
    } else {
        value.to_string()
    }
}

/// Encode a row of fields as one CSV line (no trailing newline)
pub fn encode_row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| encode_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}
