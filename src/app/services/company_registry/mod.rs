//! Company registry service for O(1) enrichment lookups
//!
//! This module indexes the two auxiliary join tables used to enrich merged
//! company records: the all-companies table (short name → tax identifier and
//! full name) and the company detail table (tax identifier → representative
//! region). Tax identifiers are canonicalized on both sides of the join.

use std::collections::HashMap;

pub mod loader;
pub mod metadata;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use loader::canonical_tax_id;
pub use metadata::{CompanyIdentity, LoadStats};

/// Lookup tables for company enrichment
#[derive(Debug, Clone, Default)]
pub struct CompanyRegistry {
    /// Identity indexed by company short name
    pub(crate) identities: HashMap<String, CompanyIdentity>,

    /// Representative region indexed by canonical tax identifier
    pub(crate) regions: HashMap<String, String>,

    /// Statistics from building the identity index
    pub(crate) identity_stats: LoadStats,

    /// Statistics from building the region index
    pub(crate) region_stats: LoadStats,
}

impl CompanyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a company's identity by short name (O(1) lookup)
    pub fn identity(&self, short_name: &str) -> Option<&CompanyIdentity> {
        self.identities.get(short_name.trim())
    }

    /// Get the representative region for a tax identifier (O(1) lookup)
    ///
    /// The identifier is canonicalized before lookup.
    pub fn region(&self, tax_id: &str) -> Option<&str> {
        self.regions
            .get(&canonical_tax_id(tax_id))
            .map(String::as_str)
    }

    /// Number of companies with a known identity
    pub fn company_count(&self) -> usize {
        self.identities.len()
    }

    /// Number of tax identifiers with a known region
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Statistics from indexing the all-companies table
    pub fn identity_stats(&self) -> &LoadStats {
        &self.identity_stats
    }

    /// Statistics from indexing the company detail table
    pub fn region_stats(&self) -> &LoadStats {
        &self.region_stats
    }
}
