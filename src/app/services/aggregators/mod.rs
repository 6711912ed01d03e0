//! Grouped statistics over parsed and merged rows
//!
//! Every aggregator is a pure function from input rows to a new output
//! structure. Numeric cells go through the numeric normalizer; absent values
//! contribute nothing and are never counted as zero.
//!
//! - [`region`] - Per-region emission totals from the wide company × region table
//! - [`industry`] - Company counts per industry
//! - [`top_n`] - Highest companies by a numeric field
//! - [`time_series`] - Per-company yearly series from year-labelled columns
//! - [`region_list`] - Present regions in curated geographic order
//! - [`coverage`] - How much of each company's emissions its top regions cover

pub mod coverage;
pub mod industry;
pub mod region;
pub mod region_list;
pub mod time_series;
pub mod top_n;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use coverage::{
    company_profiles, summarize_coverage, top_profiles, CompanyRegionProfile, CoverageSummary,
};
pub use industry::count_industries;
pub use region::aggregate_regions;
pub use region_list::{region_list, RegionListResult};
pub use time_series::{yearly_series, year_columns, TimeSeriesResult};
pub use top_n::top_by_metric;
