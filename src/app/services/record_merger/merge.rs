//! Basic/advanced table merge

use super::stats::MergeStats;
use crate::app::models::{CompanyRecord, RawRow};
use std::collections::HashMap;
use tracing::info;

/// Merged records with merge statistics
#[derive(Debug, Clone, PartialEq)]
pub struct MergeResult {
    pub records: Vec<CompanyRecord>,
    pub stats: MergeStats,
}

/// Merge basic rows with advanced rows sharing the same `key` value
///
/// Produces one record per basic row, in basic order. Advanced values
/// override basic values on field-name collision (in place); fields only the
/// advanced row carries are appended. Advanced rows with a blank key are
/// ignored and the last advanced row wins for a duplicated key.
pub fn merge(basic: &[RawRow], advanced: &[RawRow], key: &str) -> MergeResult {
    let mut stats = MergeStats::new();
    stats.basic_rows = basic.len();
    stats.advanced_rows = advanced.len();

    let mut advanced_by_key: HashMap<&str, &RawRow> = HashMap::with_capacity(advanced.len());
    for row in advanced {
        let value = row.value(key).trim();
        if value.is_empty() {
            continue;
        }
        if advanced_by_key.insert(value, row).is_some() {
            stats.advanced_duplicates += 1;
        }
    }

    let records: Vec<CompanyRecord> = basic
        .iter()
        .map(|row| {
            let base = CompanyRecord::from_row(row);
            match advanced_by_key.get(row.value(key).trim()) {
                Some(overlay) => {
                    stats.matched += 1;
                    base.overlaid_with(overlay)
                }
                None => base,
            }
        })
        .collect();

    info!(
        "Merged {} basic rows with {} advanced rows ({} matched)",
        stats.basic_rows, stats.advanced_rows, stats.matched
    );

    MergeResult { records, stats }
}
