//! Configuration management and validation.
//!
//! Provides the configuration structures for source locations, artifact
//! names and aggregation parameters, loaded in layers: built-in defaults,
//! an optional JSON config file, environment variables, then CLI overrides.

use crate::constants::{
    self, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR,
    DEFAULT_REGION_LEADING_COLUMNS, DEFAULT_TOP_N, ENV_INPUT_DIR, ENV_OUTPUT_DIR, output_files,
    source_files,
};
use crate::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw source tables consumed by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceTable {
    BasicCompanies,
    AdvancedCompanies,
    GradeDefinitions,
    AllCompanies,
    CompanyDetail,
    RegionEmissions,
    CoalUsage,
    FundStatistics,
}

impl SourceTable {
    /// Short label used in logs and error messages
    pub fn label(&self) -> &'static str {
        match self {
            SourceTable::BasicCompanies => "basic companies",
            SourceTable::AdvancedCompanies => "advanced companies",
            SourceTable::GradeDefinitions => "grade definitions",
            SourceTable::AllCompanies => "all companies",
            SourceTable::CompanyDetail => "company detail",
            SourceTable::RegionEmissions => "region emissions",
            SourceTable::CoalUsage => "coal usage",
            SourceTable::FundStatistics => "fund statistics",
        }
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// JSON artifacts the pipeline can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Artifact {
    /// Merged and enriched company list
    CompanyList,
    /// Field name to grade buckets
    GradeMap,
    /// Representative regions in geographic order
    RegionList,
    /// Industry counts
    IndustryList,
    /// Top companies by emissions
    TopEmitters,
    /// Per-region emission totals
    RegionEmissions,
    /// Fund holding metrics
    FundList,
    /// Yearly coal usage per company
    CoalUsageMap,
}

impl Artifact {
    /// Every artifact, in emission order
    pub const ALL: [Artifact; 8] = [
        Artifact::CompanyList,
        Artifact::GradeMap,
        Artifact::RegionList,
        Artifact::IndustryList,
        Artifact::TopEmitters,
        Artifact::RegionEmissions,
        Artifact::FundList,
        Artifact::CoalUsageMap,
    ];

    /// Source tables that must be readable to build this artifact
    pub fn required_sources(&self) -> &'static [SourceTable] {
        match self {
            Artifact::CompanyList | Artifact::RegionList | Artifact::TopEmitters => &[
                SourceTable::BasicCompanies,
                SourceTable::AdvancedCompanies,
                SourceTable::AllCompanies,
                SourceTable::CompanyDetail,
            ],
            Artifact::IndustryList => &[
                SourceTable::BasicCompanies,
                SourceTable::AdvancedCompanies,
            ],
            Artifact::GradeMap => &[SourceTable::GradeDefinitions],
            Artifact::RegionEmissions => &[SourceTable::RegionEmissions],
            Artifact::FundList => &[SourceTable::FundStatistics],
            Artifact::CoalUsageMap => &[SourceTable::CoalUsage],
        }
    }

    /// Kebab-case name, as accepted on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Artifact::CompanyList => "company-list",
            Artifact::GradeMap => "grade-map",
            Artifact::RegionList => "region-list",
            Artifact::IndustryList => "industry-list",
            Artifact::TopEmitters => "top-emitters",
            Artifact::RegionEmissions => "region-emissions",
            Artifact::FundList => "fund-list",
            Artifact::CoalUsageMap => "coal-usage-map",
        }
    }

    /// Whether building this artifact needs the merged company records
    pub fn needs_merge(&self) -> bool {
        matches!(
            self,
            Artifact::CompanyList
                | Artifact::RegionList
                | Artifact::TopEmitters
                | Artifact::IndustryList
        )
    }

    /// Whether building this artifact needs the enrichment join
    pub fn needs_enrichment(&self) -> bool {
        matches!(
            self,
            Artifact::CompanyList | Artifact::RegionList | Artifact::TopEmitters
        )
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// File names of the raw source tables, relative to the input directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFiles {
    pub basic_companies: String,
    pub advanced_companies: String,
    pub grade_definitions: String,
    pub all_companies: String,
    pub company_detail: String,
    pub region_emissions: String,
    pub coal_usage: String,
    pub fund_statistics: String,
}

impl Default for SourceFiles {
    fn default() -> Self {
        Self {
            basic_companies: source_files::BASIC_COMPANIES.to_string(),
            advanced_companies: source_files::ADVANCED_COMPANIES.to_string(),
            grade_definitions: source_files::GRADE_DEFINITIONS.to_string(),
            all_companies: source_files::ALL_COMPANIES.to_string(),
            company_detail: source_files::COMPANY_DETAIL.to_string(),
            region_emissions: source_files::REGION_EMISSIONS.to_string(),
            coal_usage: source_files::COAL_USAGE.to_string(),
            fund_statistics: source_files::FUND_STATISTICS.to_string(),
        }
    }
}

impl SourceFiles {
    /// File name configured for a source table
    pub fn file_name(&self, table: SourceTable) -> &str {
        match table {
            SourceTable::BasicCompanies => &self.basic_companies,
            SourceTable::AdvancedCompanies => &self.advanced_companies,
            SourceTable::GradeDefinitions => &self.grade_definitions,
            SourceTable::AllCompanies => &self.all_companies,
            SourceTable::CompanyDetail => &self.company_detail,
            SourceTable::RegionEmissions => &self.region_emissions,
            SourceTable::CoalUsage => &self.coal_usage,
            SourceTable::FundStatistics => &self.fund_statistics,
        }
    }
}

/// File names of the emitted artifacts, relative to the output directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFiles {
    pub company_list: String,
    pub grade_map: String,
    pub region_list: String,
    pub industry_list: String,
    pub top_emitters: String,
    pub region_emissions: String,
    pub fund_list: String,
    pub coal_usage_map: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            company_list: output_files::COMPANY_LIST.to_string(),
            grade_map: output_files::GRADE_MAP.to_string(),
            region_list: output_files::REGION_LIST.to_string(),
            industry_list: output_files::INDUSTRY_LIST.to_string(),
            top_emitters: output_files::TOP_EMITTERS.to_string(),
            region_emissions: output_files::REGION_EMISSIONS.to_string(),
            fund_list: output_files::FUND_LIST.to_string(),
            coal_usage_map: output_files::COAL_USAGE_MAP.to_string(),
        }
    }
}

impl OutputFiles {
    /// File name configured for an artifact
    pub fn file_name(&self, artifact: Artifact) -> &str {
        match artifact {
            Artifact::CompanyList => &self.company_list,
            Artifact::GradeMap => &self.grade_map,
            Artifact::RegionList => &self.region_list,
            Artifact::IndustryList => &self.industry_list,
            Artifact::TopEmitters => &self.top_emitters,
            Artifact::RegionEmissions => &self.region_emissions,
            Artifact::FundList => &self.fund_list,
            Artifact::CoalUsageMap => &self.coal_usage_map,
        }
    }
}

/// Aggregation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Leading non-region columns of the wide region table
    pub region_leading_columns: usize,

    /// Number of companies in the top emitters artifact
    pub top_n: usize,

    /// Company field ranked by the top emitters artifact
    pub top_metric_field: String,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            region_leading_columns: DEFAULT_REGION_LEADING_COLUMNS,
            top_n: DEFAULT_TOP_N,
            top_metric_field: constants::company_columns::EMISSIONS.to_string(),
        }
    }
}

/// Global configuration for a processing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the raw CSV exports
    pub input_dir: PathBuf,

    /// Directory receiving the JSON artifacts
    pub output_dir: PathBuf,

    /// Source table file names
    pub sources: SourceFiles,

    /// Artifact file names
    pub outputs: OutputFiles,

    /// Aggregation parameters
    pub aggregation: AggregationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sources: SourceFiles::default(),
            outputs: OutputFiles::default(),
            aggregation: AggregationConfig::default(),
        }
    }
}

impl Config {
    /// Default config file location under the user config directory
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user config directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a JSON file; missing keys take defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file '{}'", path.display()),
                e,
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::serialization(
                format!("Failed to parse config file '{}'", path.display()),
                e,
            )
        })
    }

    /// Load configuration in layers: defaults, file, environment, overrides
    pub fn load_layered(
        input_override: Option<PathBuf>,
        output_override: Option<PathBuf>,
        config_file: Option<&Path>,
    ) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        if let Some(input) = input_override {
            config.input_dir = input;
        }
        if let Some(output) = output_override {
            config.output_dir = output;
        }

        debug!("Layered configuration: {:?}", config);
        Ok(config)
    }

    /// Apply directory overrides from the environment
    ///
    /// The lookup is injected so tests do not touch process-global state.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup(ENV_INPUT_DIR).filter(|v| !v.trim().is_empty()) {
            self.input_dir = PathBuf::from(input);
        }
        if let Some(output) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.trim().is_empty()) {
            self.output_dir = PathBuf::from(output);
        }
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<()> {
        if self.aggregation.top_n == 0 {
            return Err(Error::configuration("top_n must be at least 1"));
        }

        if self.aggregation.top_metric_field.trim().is_empty() {
            return Err(Error::configuration("top_metric_field cannot be empty"));
        }

        if self.input_dir == self.output_dir {
            return Err(Error::configuration(format!(
                "Input and output directories must differ: {}",
                self.input_dir.display()
            )));
        }

        Ok(())
    }

    /// Full path of a source table
    pub fn source_path(&self, table: SourceTable) -> PathBuf {
        self.input_dir.join(self.sources.file_name(table))
    }

    /// Full path of an artifact
    pub fn output_path(&self, artifact: Artifact) -> PathBuf {
        self.output_dir.join(self.outputs.file_name(artifact))
    }

    /// Create the output directory if it doesn't exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        if !self.output_dir.exists() {
            std::fs::create_dir_all(&self.output_dir).map_err(|e| {
                Error::io(
                    format!(
                        "Failed to create output directory '{}'",
                        self.output_dir.display()
                    ),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.aggregation.top_n, 10);
        assert_eq!(config.aggregation.region_leading_columns, 2);
    }

    #[test]
    fn test_partial_config_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{ "input_dir": "/data/raw", "aggregation": {{ "top_n": 5 }} }}"#
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();

        assert_eq!(config.input_dir, PathBuf::from("/data/raw"));
        assert_eq!(config.aggregation.top_n, 5);
        assert_eq!(config.aggregation.region_leading_columns, 2);
        assert_eq!(config.sources, SourceFiles::default());
    }

    #[test]
    fn test_malformed_config_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Serialization { .. }));
    }

    #[test]
    fn test_env_overrides_apply_before_cli() {
        let mut config = Config::default();
        config.apply_env_overrides(|key| match key {
            ENV_INPUT_DIR => Some("/env/in".to_string()),
            ENV_OUTPUT_DIR => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(config.input_dir, PathBuf::from("/env/in"));
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_validate_rejects_zero_top_n() {
        let mut config = Config::default();
        config.aggregation.top_n = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_same_directories() {
        let mut config = Config::default();
        config.output_dir = config.input_dir.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_artifact_sources() {
        assert_eq!(
            Artifact::FundList.required_sources(),
            &[SourceTable::FundStatistics]
        );
        assert!(Artifact::TopEmitters.needs_enrichment());
        assert!(!Artifact::IndustryList.needs_enrichment());
    }
}
