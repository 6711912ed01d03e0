//! Company enrichment from the registry
//!
//! For each merged record: short name → tax identifier and full name, then
//! tax identifier → representative region. A miss is recorded as an
//! [`EnrichmentNote`] and logged; whatever was found is still written.

use super::stats::EnrichmentStats;
use crate::app::models::{CompanyRecord, EnrichmentNote, LookupFailure};
use crate::app::services::company_registry::CompanyRegistry;
use crate::constants::company_columns;
use tracing::{info, warn};

/// Enriched records with diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentResult {
    /// One record per input record, in input order
    pub records: Vec<CompanyRecord>,

    /// One note per failed lookup
    pub notes: Vec<EnrichmentNote>,

    pub stats: EnrichmentStats,
}

/// Enrich records with tax identifier, full name and representative region
///
/// Returns new records; the input is left untouched.
pub fn enrich(records: &[CompanyRecord], registry: &CompanyRegistry) -> EnrichmentResult {
    let mut stats = EnrichmentStats::new();
    let mut notes = Vec::new();

    let enriched: Vec<CompanyRecord> = records
        .iter()
        .map(|record| {
            stats.total_records += 1;
            let (enriched, note) = enrich_record(record, registry);
            match note {
                Some(note) => {
                    warn!("Enrichment miss for {}", note);
                    stats.add_miss(&note);
                    notes.push(note);
                }
                None => stats.fully_enriched += 1,
            }
            enriched
        })
        .collect();

    info!("{}", stats.summary());

    EnrichmentResult {
        records: enriched,
        notes,
        stats,
    }
}

/// Enrich a single record, returning the failed lookup if any
pub fn enrich_record(
    record: &CompanyRecord,
    registry: &CompanyRegistry,
) -> (CompanyRecord, Option<EnrichmentNote>) {
    let company = record.value(company_columns::SHORT_NAME).trim();
    let miss = |failure| EnrichmentNote {
        company: company.to_string(),
        failure,
    };

    let Some(identity) = registry.identity(company) else {
        return (record.clone(), Some(miss(LookupFailure::TaxIdNotFound)));
    };

    let mut updates = Vec::with_capacity(3);
    if !identity.full_name.is_empty() {
        updates.push((company_columns::FULL_NAME, identity.full_name.clone()));
    }
    if identity.tax_id.is_empty() {
        return (
            record.with_fields(updates),
            Some(miss(LookupFailure::TaxIdNotFound)),
        );
    }
    updates.push((company_columns::TAX_ID, identity.tax_id.clone()));

    let note = match registry.region(&identity.tax_id) {
        Some(region) => {
            updates.push((company_columns::REPRESENTATIVE_REGION, region.to_string()));
            None
        }
        None => Some(miss(LookupFailure::RegionNotFound {
            tax_id: identity.tax_id.clone(),
        })),
    };

    (record.with_fields(updates), note)
}
