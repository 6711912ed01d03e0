//! Whole-table parsing

use super::line_parser::split_fields;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{RawRow, RawTable};
use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parse CSV text into a table
pub fn parse_table(text: &str) -> RawTable {
    parse_table_with_stats(text).table
}

/// Parse CSV text into a table, reporting line statistics
///
/// The first non-blank line is the header. Header and data cells are kept
/// verbatim; only a leading byte order mark is removed. Extra fields beyond
/// the header are ignored.
pub fn parse_table_with_stats(text: &str) -> ParseResult {
    let normalized = text
        .strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(text)
        .replace('\r', "");

    let mut stats = ParseStats::new();
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for line in normalized.split('\n') {
        stats.lines_seen += 1;
        if line.trim().is_empty() {
            stats.blank_lines_skipped += 1;
            continue;
        }

        let values = split_fields(line);
        match &headers {
            None => {
                headers = Some(values);
            }
            Some(headers) => {
                if values.len() < headers.len() {
                    stats.rows_padded += 1;
                }
                rows.push(build_row(headers, values));
            }
        }
    }

    stats.rows_produced = rows.len();
    ParseResult {
        table: RawTable::new(headers.unwrap_or_default(), rows),
        stats,
    }
}

/// Pair values with headers positionally, padding missing trailing values
fn build_row(headers: &[String], values: Vec<String>) -> RawRow {
    let mut values = values.into_iter();
    RawRow::from_pairs(
        headers
            .iter()
            .map(|header| (header.as_str(), values.next().unwrap_or_default())),
    )
}

/// Read and parse a CSV file
///
/// A missing file is reported as [`Error::SourceNotFound`] naming `table`
/// and the path; other read failures are I/O errors.
pub fn read_table(path: &Path, table: &str) -> Result<RawTable> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::source_not_found(table, path.display().to_string())
        } else {
            Error::io(format!("Failed to read {} table '{}'", table, path.display()), e)
        }
    })?;

    let result = parse_table_with_stats(&text);
    debug!("Parsed {} table: {}", table, result.stats.summary());
    Ok(result.table)
}
