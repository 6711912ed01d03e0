//! Quote-aware CSV parser for spreadsheet exports
//!
//! Turns raw CSV text into ordered rows of named fields. Parsing is
//! best-effort and never fails: blank lines are dropped wherever they occur,
//! short rows are padded with empty strings, and an unterminated quote simply
//! swallows the rest of its line.
//!
//! ## Architecture
//!
//! - [`line_parser`] - Splitting one line into fields, and the inverse encoding
//! - [`table`] - Whole-text parsing into a [`RawTable`](crate::app::models::RawTable)
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use emissions_processor::app::services::csv_parser::parse_table;
//!
//! let table = parse_table("公司,X\r\nA,\"1,000\"\r\n");
//! assert_eq!(table.rows[0].get("X"), Some("1,000"));
//! ```

pub mod line_parser;
pub mod stats;
pub mod table;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_parser::{encode_field, encode_row, split_fields};
pub use stats::{ParseResult, ParseStats};
pub use table::{parse_table, parse_table_with_stats, read_table};
