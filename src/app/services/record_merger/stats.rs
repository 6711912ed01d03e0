//! Merge and enrichment statistics

use crate::app::models::{EnrichmentNote, LookupFailure};

/// Statistics for the basic/advanced merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeStats {
    /// Rows in the basic table (equals the number of output records)
    pub basic_rows: usize,

    /// Rows in the advanced table
    pub advanced_rows: usize,

    /// Basic rows that found an advanced overlay
    pub matched: usize,

    /// Advanced rows superseded by a later row with the same key
    pub advanced_duplicates: usize,
}

impl MergeStats {
    /// Create new empty merge statistics
    pub fn new() -> Self {
        Self {
            basic_rows: 0,
            advanced_rows: 0,
            matched: 0,
            advanced_duplicates: 0,
        }
    }

    /// Basic rows with no advanced overlay
    pub fn unmatched(&self) -> usize {
        self.basic_rows - self.matched
    }
}

impl Default for MergeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics for the enrichment pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentStats {
    /// Records processed
    pub total_records: usize,

    /// Records that received both tax identifier and region
    pub fully_enriched: usize,

    /// Records whose short name had no tax identifier
    pub tax_id_misses: usize,

    /// Records whose tax identifier had no region
    pub region_misses: usize,
}

impl EnrichmentStats {
    /// Create new empty enrichment statistics
    pub fn new() -> Self {
        Self {
            total_records: 0,
            fully_enriched: 0,
            tax_id_misses: 0,
            region_misses: 0,
        }
    }

    /// Record a lookup miss
    pub fn add_miss(&mut self, note: &EnrichmentNote) {
        match note.failure {
            LookupFailure::TaxIdNotFound => self.tax_id_misses += 1,
            LookupFailure::RegionNotFound { .. } => self.region_misses += 1,
        }
    }

    /// Share of records fully enriched, as a percentage
    pub fn enrichment_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.fully_enriched as f64 / self.total_records as f64) * 100.0
        }
    }

    /// Get a summary string of the enrichment pass
    pub fn summary(&self) -> String {
        format!(
            "Enriched {}/{} companies ({:.1}%), {} tax id misses, {} region misses",
            self.fully_enriched,
            self.total_records,
            self.enrichment_rate(),
            self.tax_id_misses,
            self.region_misses
        )
    }
}

impl Default for EnrichmentStats {
    fn default() -> Self {
        Self::new()
    }
}
