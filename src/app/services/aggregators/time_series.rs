//! Per-company yearly series

use crate::app::models::{CoalUsageMap, CoalUsagePoint, RawRow, RawTable};
use crate::app::services::numeric::parse_number;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static YEAR_COLUMN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("Invalid regex"));

/// Series keyed by company with row-level counts
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeriesResult {
    pub series: CoalUsageMap,

    /// Rows skipped because the key cell was blank
    pub rows_skipped: usize,

    /// Keyed rows that had no strictly positive year value
    pub rows_without_points: usize,
}

/// Year-labelled columns as `(year, header)`, ascending by year
pub fn year_columns(headers: &[String]) -> Vec<(i32, &str)> {
    let mut years: Vec<(i32, &str)> = headers
        .iter()
        .filter(|header| YEAR_COLUMN.is_match(header))
        .filter_map(|header| header.parse::<i32>().ok().map(|year| (year, header.as_str())))
        .collect();
    years.sort_by_key(|(year, _)| *year);
    years
}

/// Points of one row for the given year columns
///
/// Only present, strictly positive values are kept.
pub fn series_for_row(row: &RawRow, years: &[(i32, &str)]) -> Vec<CoalUsagePoint> {
    years
        .iter()
        .filter_map(|(year, column)| {
            parse_number(row.value(column))
                .filter(|value| *value > 0.0)
                .map(|value| CoalUsagePoint { year: *year, value })
        })
        .collect()
}

/// Build the company → yearly series map
///
/// Companies without any qualifying point are omitted. A later row for the
/// same company replaces the earlier series in place.
pub fn yearly_series(table: &RawTable, key_column: &str) -> TimeSeriesResult {
    let years = year_columns(&table.headers);
    debug!(
        "Detected year columns: {:?}",
        years.iter().map(|(year, _)| *year).collect::<Vec<_>>()
    );

    let mut result = TimeSeriesResult::default();
    for row in &table.rows {
        let company = row.value(key_column).trim();
        if company.is_empty() {
            result.rows_skipped += 1;
            continue;
        }

        let points = series_for_row(row, &years);
        if points.is_empty() {
            result.rows_without_points += 1;
        } else {
            result.series.insert(company.to_string(), points);
        }
    }

    result
}
