//! Regional coverage analysis
//!
//! For each company, regions are ranked by that company's emissions and the
//! cumulative share of its own total covered by the top 1..=5 regions is
//! computed. Summaries take min/max/mean across companies per depth. This is
//! an analysis report, not an emitted artifact.

use crate::app::models::RawTable;
use crate::app::services::numeric::parse_number;
use crate::constants::MAX_COVERAGE_DEPTH;
use serde::Serialize;
use std::collections::BTreeMap;

/// One company's strictly positive regional emissions, largest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyRegionProfile {
    pub company: String,
    pub regions: Vec<(String, f64)>,
    pub total: f64,
}

impl CompanyRegionProfile {
    /// Number of regions with positive emissions
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Cumulative share (percent) of the company total covered by the top
    /// 1, 2, ... regions, up to `depth` entries
    pub fn cumulative_coverage(&self, depth: usize) -> Vec<f64> {
        if self.total <= 0.0 {
            return Vec::new();
        }

        self.regions
            .iter()
            .take(depth)
            .scan(0.0, |cumulative, (_, value)| {
                *cumulative += value;
                Some(*cumulative / self.total * 100.0)
            })
            .collect()
    }
}

/// Coverage statistics for one prefix depth
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageStat {
    pub top_n: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,

    /// Companies with at least `top_n` regions
    pub companies: usize,
}

/// Company count per number of regions with emissions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCountBucket {
    pub region_count: usize,
    pub companies: usize,
}

/// Coverage report over a set of companies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageSummary {
    pub companies_analyzed: usize,

    /// Largest number of regions any company emits in
    pub max_region_count: usize,

    /// First company reaching `max_region_count`
    pub max_region_company: Option<String>,

    /// Ascending by region count
    pub distribution: Vec<RegionCountBucket>,

    /// One entry per depth 1..=5 that at least one company reaches
    pub coverage: Vec<CoverageStat>,
}

/// Per-company regional profiles from the wide region table
///
/// The first column names the company; region columns follow the first
/// `leading_columns` headers.
pub fn company_profiles(table: &RawTable, leading_columns: usize) -> Vec<CompanyRegionProfile> {
    let Some(company_column) = table.headers.first() else {
        return Vec::new();
    };

    table
        .rows
        .iter()
        .map(|row| {
            let mut regions: Vec<(String, f64)> = table
                .headers
                .iter()
                .skip(leading_columns)
                .filter_map(|region| {
                    parse_number(row.value(region))
                        .filter(|value| *value > 0.0)
                        .map(|value| (region.clone(), value))
                })
                .collect();
            regions.sort_by(|a, b| b.1.total_cmp(&a.1));

            CompanyRegionProfile {
                company: row.value(company_column).to_string(),
                total: regions.iter().map(|(_, value)| value).sum(),
                regions,
            }
        })
        .collect()
}

/// The `n` profiles with the largest totals, largest first, ties in input order
pub fn top_profiles(profiles: &[CompanyRegionProfile], n: usize) -> Vec<CompanyRegionProfile> {
    let mut ranked: Vec<&CompanyRegionProfile> = profiles.iter().collect();
    ranked.sort_by(|a, b| b.total.total_cmp(&a.total));
    ranked.into_iter().take(n).cloned().collect()
}

/// Summarize coverage and region-count distribution across profiles
pub fn summarize_coverage(profiles: &[CompanyRegionProfile]) -> CoverageSummary {
    let mut max_region_count = 0;
    let mut max_region_company = None;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut by_depth: Vec<Vec<f64>> = vec![Vec::new(); MAX_COVERAGE_DEPTH];

    for profile in profiles {
        let count = profile.region_count();
        if count > max_region_count {
            max_region_count = count;
            max_region_company = Some(profile.company.clone());
        }
        *distribution.entry(count).or_insert(0) += 1;

        for (depth, coverage) in profile
            .cumulative_coverage(MAX_COVERAGE_DEPTH)
            .into_iter()
            .enumerate()
        {
            by_depth[depth].push(coverage);
        }
    }

    let coverage = by_depth
        .iter()
        .enumerate()
        .filter(|(_, values)| !values.is_empty())
        .map(|(depth, values)| CoverageStat {
            top_n: depth + 1,
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean: values.iter().sum::<f64>() / values.len() as f64,
            companies: values.len(),
        })
        .collect();

    CoverageSummary {
        companies_analyzed: profiles.len(),
        max_region_count,
        max_region_company,
        distribution: distribution
            .into_iter()
            .map(|(region_count, companies)| RegionCountBucket {
                region_count,
                companies,
            })
            .collect(),
        coverage,
    }
}
