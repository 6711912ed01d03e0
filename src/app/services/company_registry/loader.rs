//! Building the registry from raw auxiliary tables

use super::metadata::{CompanyIdentity, LoadStats};
use super::CompanyRegistry;
use crate::app::models::RawTable;
use crate::constants::{company_columns, TAX_ID_LENGTH};
use std::collections::HashMap;
use tracing::{debug, info};

/// Canonicalize a tax identifier
///
/// Trims whitespace and left-pads all-digit identifiers shorter than the
/// canonical length with zeros, restoring leading zeros dropped by
/// spreadsheet software.
pub fn canonical_tax_id(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.is_empty()
        && trimmed.len() < TAX_ID_LENGTH
        && trimmed.chars().all(|c| c.is_ascii_digit())
    {
        format!("{:0>width$}", trimmed, width = TAX_ID_LENGTH)
    } else {
        trimmed.to_string()
    }
}

impl CompanyRegistry {
    /// Build a registry from the all-companies and company detail tables
    ///
    /// Rows with a blank key are skipped; on duplicate keys the later row wins.
    pub fn from_tables(all_companies: &RawTable, company_detail: &RawTable) -> Self {
        let (identities, identity_stats) = index_identities(all_companies);
        let (regions, region_stats) = index_regions(company_detail);

        info!("Company identities: {}", identity_stats.summary());
        info!("Company regions: {}", region_stats.summary());

        Self {
            identities,
            regions,
            identity_stats,
            region_stats,
        }
    }
}

fn index_identities(table: &RawTable) -> (HashMap<String, CompanyIdentity>, LoadStats) {
    let mut identities = HashMap::with_capacity(table.len());
    let mut stats = LoadStats::new();

    for row in &table.rows {
        stats.rows_seen += 1;

        let short_name = row.value(company_columns::SHORT_NAME).trim();
        if short_name.is_empty() {
            stats.rows_skipped += 1;
            continue;
        }

        let identity = CompanyIdentity {
            tax_id: canonical_tax_id(row.value(company_columns::TAX_ID)),
            full_name: row.value(company_columns::FULL_NAME).trim().to_string(),
        };

        if identities.insert(short_name.to_string(), identity).is_some() {
            debug!("Duplicate company short name '{}', keeping later row", short_name);
            stats.duplicate_keys += 1;
        }
    }

    stats.entries_indexed = identities.len();
    (identities, stats)
}

fn index_regions(table: &RawTable) -> (HashMap<String, String>, LoadStats) {
    let mut regions = HashMap::with_capacity(table.len());
    let mut stats = LoadStats::new();

    for row in &table.rows {
        stats.rows_seen += 1;

        let tax_id = canonical_tax_id(row.value(company_columns::TAX_ID));
        let region = row.value(company_columns::REPRESENTATIVE_REGION).trim();
        if tax_id.is_empty() || region.is_empty() {
            stats.rows_skipped += 1;
            continue;
        }

        if regions.insert(tax_id.clone(), region.to_string()).is_some() {
            debug!("Duplicate tax identifier '{}', keeping later row", tax_id);
            stats.duplicate_keys += 1;
        }
    }

    stats.entries_indexed = regions.len();
    (regions, stats)
}
