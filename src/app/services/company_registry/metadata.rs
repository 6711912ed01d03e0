//! Company registry entries and load statistics

/// Identity fields resolved from the all-companies table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyIdentity {
    /// Canonical tax identifier, empty when the source cell was blank
    pub tax_id: String,

    /// Full legal name, empty when the source cell was blank
    pub full_name: String,
}

/// Statistics about indexing one auxiliary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of rows in the source table
    pub rows_seen: usize,

    /// Number of distinct keys indexed
    pub entries_indexed: usize,

    /// Rows skipped because the key cell was blank
    pub rows_skipped: usize,

    /// Rows whose key was already indexed (the later row wins)
    pub duplicate_keys: usize,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            rows_seen: 0,
            entries_indexed: 0,
            rows_skipped: 0,
            duplicate_keys: 0,
        }
    }

    /// Calculate the skip rate as a percentage
    pub fn skip_rate(&self) -> f64 {
        if self.rows_seen == 0 {
            0.0
        } else {
            (self.rows_skipped as f64 / self.rows_seen as f64) * 100.0
        }
    }

    /// Get a summary string of the indexing pass
    pub fn summary(&self) -> String {
        format!(
            "Indexed {} of {} rows ({:.1}% skipped, {} duplicates)",
            self.entries_indexed,
            self.rows_seen,
            self.skip_rate(),
            self.duplicate_keys
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}
