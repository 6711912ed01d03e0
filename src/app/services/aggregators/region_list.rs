//! Present regions in curated geographic order

use crate::app::models::CompanyRecord;
use crate::constants::REGION_ORDER;
use indexmap::IndexSet;
use tracing::warn;

/// Ordered region list with the names the curated ordering dropped
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionListResult {
    /// Regions in geographic order
    pub regions: Vec<String>,

    /// Distinct region names absent from the curated ordering, first-seen order
    pub dropped: Vec<String>,
}

/// Regions appearing in `field` of any record, in curated geographic order
///
/// Names missing from the curated ordering cannot be placed and are dropped,
/// with one warning per distinct name.
pub fn region_list(records: &[CompanyRecord], field: &str) -> RegionListResult {
    let mut present: IndexSet<&str> = IndexSet::new();
    for region in records
        .iter()
        .map(|record| record.value(field).trim())
        .filter(|region| !region.is_empty())
    {
        present.insert(region);
    }

    let regions = REGION_ORDER
        .iter()
        .filter(|region| present.contains(**region))
        .map(|region| region.to_string())
        .collect();

    let dropped: Vec<String> = present
        .iter()
        .filter(|region| !REGION_ORDER.contains(*region))
        .map(|region| region.to_string())
        .collect();
    for region in &dropped {
        warn!("Region '{}' is not in the curated ordering and was dropped", region);
    }

    RegionListResult { regions, dropped }
}
