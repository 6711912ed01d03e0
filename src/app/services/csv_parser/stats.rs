//! Parsing statistics and result structures

use crate::app::models::RawTable;

/// Parsed table together with parsing statistics
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseResult {
    pub table: RawTable,
    pub stats: ParseStats,
}

/// Line-level statistics for one parse
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ParseStats {
    /// Lines in the input after line-ending normalization
    pub lines_seen: usize,

    /// Whitespace-only lines dropped
    pub blank_lines_skipped: usize,

    /// Data rows produced
    pub rows_produced: usize,

    /// Rows that had fewer fields than headers
    pub rows_padded: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            lines_seen: 0,
            blank_lines_skipped: 0,
            rows_produced: 0,
            rows_padded: 0,
        }
    }

    /// Share of produced rows that needed padding, as a percentage
    pub fn padded_rate(&self) -> f64 {
        if self.rows_produced == 0 {
            0.0
        } else {
            (self.rows_padded as f64 / self.rows_produced as f64) * 100.0
        }
    }

    /// Get a one-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} lines, {} blank skipped, {} rows ({} padded)",
            self.lines_seen, self.blank_lines_skipped, self.rows_produced, self.rows_padded
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
