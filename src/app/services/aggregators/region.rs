//! Per-region emission totals

use crate::app::models::{RawTable, RegionEmission};
use crate::app::services::numeric::{parse_number, share_percent};
use indexmap::IndexMap;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
struct RegionAccumulator {
    total: f64,
    companies: usize,
}

/// Aggregate the wide company × region table into per-region totals
///
/// Region columns are every header after the first `leading_columns`. Only
/// strictly positive cells add to a region's total and company count.
/// Regions with no positive cell are excluded. Shares are taken against the
/// sum of all regional totals; output is sorted by the rounded total,
/// descending, with ties kept in column order.
pub fn aggregate_regions(table: &RawTable, leading_columns: usize) -> Vec<RegionEmission> {
    let region_columns = table.headers.iter().skip(leading_columns);
    let mut accumulators: IndexMap<String, RegionAccumulator> = region_columns
        .map(|region| (region.clone(), RegionAccumulator::default()))
        .collect();

    for row in &table.rows {
        for region in table.headers.iter().skip(leading_columns) {
            if let Some(value) = parse_number(row.value(region)).filter(|v| *v > 0.0) {
                let accumulator = accumulators.entry(region.clone()).or_default();
                accumulator.total += value;
                accumulator.companies += 1;
            }
        }
    }

    let grand_total: f64 = accumulators.values().map(|acc| acc.total).sum();
    debug!(
        "Aggregated {} region columns over {} rows, grand total {}",
        accumulators.len(),
        table.len(),
        grand_total
    );

    let mut regions: Vec<RegionEmission> = accumulators
        .into_iter()
        .filter(|(_, acc)| acc.total > 0.0)
        .map(|(region, acc)| RegionEmission {
            region,
            total_emissions: acc.total.round() as i64,
            share_percent: share_percent(acc.total, Some(grand_total)),
            company_count: acc.companies,
        })
        .collect();
    regions.sort_by(|a, b| b.total_emissions.cmp(&a.total_emissions));
    regions
}
