//! Ranking companies by a numeric field

use crate::app::models::CompanyRecord;
use crate::app::services::numeric::parse_number;

/// The `n` records with the highest value of `field`, highest first
///
/// Records whose value is absent are excluded rather than ranked as zero.
/// Ties keep input order. Records are returned with all their fields.
pub fn top_by_metric(records: &[CompanyRecord], field: &str, n: usize) -> Vec<CompanyRecord> {
    let mut ranked: Vec<(f64, &CompanyRecord)> = records
        .iter()
        .filter_map(|record| parse_number(record.value(field)).map(|value| (value, record)))
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    ranked
        .into_iter()
        .take(n)
        .map(|(_, record)| record.clone())
        .collect()
}
