//! Join/merge engine for company records
//!
//! Combines the basic and advanced company tables by company short name and
//! enriches the merged records with tax identifier, full name and
//! representative region from the company registry.
//!
//! Both stages are left-preserving: every basic row yields exactly one
//! output record, and lookup misses leave fields absent rather than
//! fabricated. Neither stage mutates its input.

pub mod enrichment;
pub mod merge;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use enrichment::{enrich, EnrichmentResult};
pub use merge::{merge, MergeResult};
pub use stats::{EnrichmentStats, MergeStats};
