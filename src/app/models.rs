//! Data models for emissions processing
//!
//! This module contains the core data structures flowing through the
//! pipeline: raw spreadsheet rows, merged company records, grade buckets,
//! and the aggregated structures emitted as JSON artifacts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Raw Tabular Data
// =============================================================================

/// One data line of a CSV table: header → raw cell text, in header order
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct RawRow {
    fields: IndexMap<String, String>,
}

impl RawRow {
    /// Build a row from `(header, value)` pairs
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Raw cell text for a column, if the column exists
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Raw cell text for a column, empty when the column is missing
    pub fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Fields in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A parsed CSV table: header row plus data rows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    /// Column headers in file order
    pub headers: Vec<String>,

    /// Data rows, each keyed by `headers`
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Create a table from headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Company Records
// =============================================================================

/// Merged per-company entity
///
/// Values stay textual; numeric interpretation is left to consumers through
/// the numeric normalizer. Field order is the basic table's header order
/// followed by fields only the advanced table carries, then enrichment fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct CompanyRecord {
    fields: IndexMap<String, String>,
}

impl CompanyRecord {
    /// Start a record from a raw row
    pub fn from_row(row: &RawRow) -> Self {
        Self {
            fields: row
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Return a copy with `row`'s fields laid over this record's fields
    ///
    /// Existing fields keep their position; new fields are appended.
    pub fn overlaid_with(&self, row: &RawRow) -> Self {
        let mut fields = self.fields.clone();
        for (key, value) in row.iter() {
            fields.insert(key.to_string(), value.to_string());
        }
        Self { fields }
    }

    /// Return a copy with the given fields set
    ///
    /// Existing fields are overwritten in place; new fields are appended.
    pub fn with_fields<'a, I>(&self, updates: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, String)>,
    {
        let mut fields = self.fields.clone();
        for (name, value) in updates {
            fields.insert(name.to_string(), value);
        }
        Self { fields }
    }

    /// Field value, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Field value, empty when missing
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Fields in record order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Why an enrichment lookup failed for a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LookupFailure {
    /// The short name has no entry in the all-companies table
    TaxIdNotFound,
    /// The tax identifier has no entry in the company detail table
    RegionNotFound { tax_id: String },
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupFailure::TaxIdNotFound => write!(f, "tax identifier not found"),
            LookupFailure::RegionNotFound { tax_id } => {
                write!(f, "representative region not found for tax identifier {tax_id}")
            }
        }
    }
}

/// Diagnostic note recorded for an enrichment miss
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichmentNote {
    /// Company short name
    pub company: String,

    /// Which lookup failed
    pub failure: LookupFailure,
}

impl fmt::Display for EnrichmentNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.company, self.failure)
    }
}

// =============================================================================
// Grades
// =============================================================================

/// One labeled numeric bucket; a missing bound is unbounded on that side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeDefinition {
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "compact_number_opt")]
    pub min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "compact_number_opt")]
    pub max: Option<f64>,
}

impl GradeDefinition {
    /// Whether `value` lies within the inclusive bounds
    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Field name → buckets in source-row order (not sorted by bound)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct GradeMap {
    fields: IndexMap<String, Vec<GradeDefinition>>,
}

impl GradeMap {
    /// Create an empty grade map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bucket to a field's list
    pub fn push(&mut self, field: &str, grade: GradeDefinition) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(grade);
    }

    /// Buckets for a field
    pub fn grades(&self, field: &str) -> Option<&[GradeDefinition]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// First bucket of `field`, in source order, whose bounds contain `value`
    pub fn classify(&self, field: &str, value: f64) -> Option<&GradeDefinition> {
        self.grades(field)?.iter().find(|grade| grade.contains(value))
    }

    /// Field names in first-appearance order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field has buckets
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// =============================================================================
// Aggregates
// =============================================================================

/// Emission statistics for one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionEmission {
    #[serde(rename = "縣市")]
    pub region: String,

    /// Total in tonnes CO2e, rounded to the nearest integer
    #[serde(rename = "總排放量")]
    pub total_emissions: i64,

    #[serde(rename = "總排放量佔比", serialize_with = "compact_number")]
    pub share_percent: f64,

    /// Companies with a strictly positive value in this region
    #[serde(rename = "企業數")]
    pub company_count: usize,
}

/// Number of companies per industry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryCount {
    #[serde(rename = "產業分類")]
    pub industry: String,

    #[serde(rename = "企業數")]
    pub count: usize,
}

/// One year of a per-company series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoalUsagePoint {
    pub year: i32,

    #[serde(serialize_with = "compact_number")]
    pub value: f64,
}

/// Company name → yearly series, ascending by year
pub type CoalUsageMap = IndexMap<String, Vec<CoalUsagePoint>>;

/// Holding metrics for one fund
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    #[serde(rename = "基金代號")]
    pub code: String,

    #[serde(rename = "基金名稱")]
    pub name: String,

    /// Market value in millions
    #[serde(rename = "總市值")]
    pub total_market_value_million: i64,

    #[serde(rename = "排碳大戶家數", serialize_with = "compact_number")]
    pub high_emitter_count: f64,

    #[serde(rename = "排碳大戶佔比", serialize_with = "compact_number")]
    pub high_emitter_share_percent: f64,

    #[serde(rename = "排碳大戶總碳排量", serialize_with = "compact_number")]
    pub high_emitter_total_emissions: f64,

    #[serde(rename = "使用燃煤家數", serialize_with = "compact_number")]
    pub coal_user_count: f64,
}

// =============================================================================
// JSON Number Rendering
// =============================================================================

/// Largest integer an f64 represents exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serialize integral floats as JSON integers (`5`, not `5.0`)
pub fn compact_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// [`compact_number`] for optional values
pub fn compact_number_opt<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => compact_number(value, serializer),
        None => serializer.serialize_none(),
    }
}
