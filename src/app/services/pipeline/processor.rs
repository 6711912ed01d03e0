//! Building and rendering artifacts from loaded sources

use super::progress::ProgressReporter;
use super::sources::LoadedSources;
use crate::app::models::{CompanyRecord, EnrichmentNote};
use crate::app::services::aggregators::{
    aggregate_regions, count_industries, region_list, top_by_metric, yearly_series,
};
use crate::app::services::company_registry::CompanyRegistry;
use crate::app::services::fund_metrics::fund_list;
use crate::app::services::grade_mapper::build_grade_map;
use crate::app::services::record_merger::{
    EnrichmentResult, EnrichmentStats, MergeResult, MergeStats, enrich, merge,
};
use crate::config::{Artifact, Config, SourceTable};
use crate::constants::{COAL_COMPANY_COLUMN, company_columns};
use crate::{Error, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// One artifact rendered to pretty-printed JSON, not yet written
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedArtifact {
    pub artifact: Artifact,

    /// Destination path
    pub path: PathBuf,

    /// Top-level entries (list items or map keys)
    pub entries: usize,

    pub json: String,
}

/// Everything produced by the build phase
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub rendered: Vec<RenderedArtifact>,
    pub merge_stats: Option<MergeStats>,
    pub enrichment_stats: Option<EnrichmentStats>,
    pub enrichment_notes: Vec<EnrichmentNote>,
    pub dropped_regions: Vec<String>,
}

/// Build and render the selected artifacts
///
/// The merge runs only when a selected artifact uses company records, and
/// enrichment only when one uses the enriched fields.
pub fn build_artifacts(
    config: &Config,
    sources: &LoadedSources,
    artifacts: &[Artifact],
    progress: &ProgressReporter,
) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    let merged: Option<MergeResult> = if artifacts.iter().any(Artifact::needs_merge) {
        let basic = sources.table(SourceTable::BasicCompanies)?;
        let advanced = sources.table(SourceTable::AdvancedCompanies)?;
        Some(merge(&basic.rows, &advanced.rows, company_columns::SHORT_NAME))
    } else {
        None
    };
    let merged_records = merged.as_ref().map_or(&[][..], |m| m.records.as_slice());

    let enriched: Option<EnrichmentResult> = if artifacts.iter().any(Artifact::needs_enrichment)
    {
        let registry = CompanyRegistry::from_tables(
            sources.table(SourceTable::AllCompanies)?,
            sources.table(SourceTable::CompanyDetail)?,
        );
        Some(enrich(merged_records, &registry))
    } else {
        None
    };
    let enriched_records = enriched.as_ref().map_or(&[][..], |e| e.records.as_slice());

    for &artifact in artifacts {
        progress.set_message(&format!("Building {}", artifact));
        let (json, entries) = match artifact {
            Artifact::CompanyList => render(artifact, enriched_records, enriched_records.len())?,
            Artifact::GradeMap => {
                let grade_map = build_grade_map(sources.table(SourceTable::GradeDefinitions)?);
                info!(
                    "Grade map fields: {}",
                    grade_map.field_names().collect::<Vec<_>>().join(", ")
                );
                render(artifact, &grade_map, grade_map.len())?
            }
            Artifact::RegionList => {
                let result = region_list(enriched_records, company_columns::REPRESENTATIVE_REGION);
                report.dropped_regions = result.dropped;
                render(artifact, &result.regions, result.regions.len())?
            }
            Artifact::IndustryList => {
                let industries = count_industries(merged_records, company_columns::INDUSTRY);
                render(artifact, &industries, industries.len())?
            }
            Artifact::TopEmitters => {
                let top: Vec<CompanyRecord> = top_by_metric(
                    enriched_records,
                    &config.aggregation.top_metric_field,
                    config.aggregation.top_n,
                );
                render(artifact, &top, top.len())?
            }
            Artifact::RegionEmissions => {
                let regions = aggregate_regions(
                    sources.table(SourceTable::RegionEmissions)?,
                    config.aggregation.region_leading_columns,
                );
                if let Some(top) = regions.first() {
                    info!("Top region: {} ({} tonnes CO2e)", top.region, top.total_emissions);
                }
                render(artifact, &regions, regions.len())?
            }
            Artifact::FundList => {
                let funds = fund_list(sources.table(SourceTable::FundStatistics)?);
                render(artifact, &funds, funds.len())?
            }
            Artifact::CoalUsageMap => {
                let result = yearly_series(
                    sources.table(SourceTable::CoalUsage)?,
                    COAL_COMPANY_COLUMN,
                );
                if result.rows_skipped > 0 {
                    info!("Skipped {} coal usage rows with a blank company", result.rows_skipped);
                }
                render(artifact, &result.series, result.series.len())?
            }
        };

        info!("Built {} with {} entries", artifact, entries);
        report.rendered.push(RenderedArtifact {
            artifact,
            path: config.output_path(artifact),
            entries,
            json,
        });
        progress.increment();
    }

    report.merge_stats = merged.map(|m| m.stats);
    if let Some(enriched) = enriched {
        report.enrichment_stats = Some(enriched.stats);
        report.enrichment_notes = enriched.notes;
    }

    Ok(report)
}

/// Render a value as two-space pretty-printed JSON
fn render<T: Serialize + ?Sized>(
    artifact: Artifact,
    value: &T,
    entries: usize,
) -> Result<(String, usize)> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::serialization(format!("Failed to render {}", artifact), e))?;
    debug!("Rendered {} ({} bytes)", artifact, json.len());
    Ok((json, entries))
}
