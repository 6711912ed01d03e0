//! Company counts per industry

use crate::app::models::{CompanyRecord, IndustryCount};
use indexmap::IndexMap;

/// Count records per distinct value of `field`
///
/// Values are trimmed and blanks ignored. Sorted by count descending; ties
/// keep first-encountered order.
pub fn count_industries(records: &[CompanyRecord], field: &str) -> Vec<IndustryCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for industry in records
        .iter()
        .map(|record| record.value(field).trim())
        .filter(|industry| !industry.is_empty())
    {
        *counts.entry(industry).or_insert(0) += 1;
    }

    let mut industries: Vec<IndustryCount> = counts
        .into_iter()
        .map(|(industry, count)| IndustryCount {
            industry: industry.to_string(),
            count,
        })
        .collect();
    industries.sort_by(|a, b| b.count.cmp(&a.count));
    industries
}
