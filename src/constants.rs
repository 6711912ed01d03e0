//! Application constants for the emissions processor
//!
//! This module contains source file names, column headers, output artifact
//! names and the curated region ordering used throughout the application.

// =============================================================================
// Source Tables
// =============================================================================

/// Default directory holding the raw CSV exports
pub const DEFAULT_INPUT_DIR: &str = "raw-data";

/// Default directory receiving the JSON artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "app/assets/data";

/// Default file names of the raw spreadsheet exports
pub mod source_files {
    pub const BASIC_COMPANIES: &str = "I. 總表（易讀版）.csv";
    pub const ADVANCED_COMPANIES: &str = "I. 總表（進階版）.csv";
    pub const GRADE_DEFINITIONS: &str = "I. 總表各欄數值分級.csv";
    pub const ALL_COMPANIES: &str = "II. 全部企業名單.csv";
    pub const COMPANY_DETAIL: &str = "III. 企業基本資料.csv";
    pub const REGION_EMISSIONS: &str = "IV. 企業縣市排放絕對值（公式）.csv";
    pub const COAL_USAGE: &str = "VIII. 歷年燃煤數據.csv";
    pub const FUND_STATISTICS: &str = "XII. 基金排碳量資訊.csv";
}

/// Default file names of the emitted JSON artifacts
pub mod output_files {
    pub const COMPANY_LIST: &str = "company-list.json";
    pub const GRADE_MAP: &str = "company-grade-map.json";
    pub const REGION_LIST: &str = "region-list.json";
    pub const INDUSTRY_LIST: &str = "industry-list.json";
    pub const TOP_EMITTERS: &str = "top-emitters.json";
    pub const REGION_EMISSIONS: &str = "region-emission-list.json";
    pub const FUND_LIST: &str = "fund-list.json";
    pub const COAL_USAGE_MAP: &str = "coal-usage-map.json";
}

// =============================================================================
// Column Headers
// =============================================================================

/// Column headers of the company tables
pub mod company_columns {
    /// Company short name, the join key between basic and advanced tables
    pub const SHORT_NAME: &str = "公司";
    pub const INDUSTRY: &str = "產業分類";
    pub const EMISSIONS: &str = "溫室氣體排放量（公噸二氧化碳當量）";

    /// Canonical tax identifier (unified business number)
    pub const TAX_ID: &str = "統編";
    pub const FULL_NAME: &str = "公司全名";
    pub const REPRESENTATIVE_REGION: &str = "代表縣市";
}

/// Column headers of the grade definitions table
pub mod grade_columns {
    pub const FIELD_NAME: &str = "欄位名稱";
    pub const LABEL: &str = "分級名稱";
    pub const MIN: &str = "最小值";
    pub const MAX: &str = "最大值";
}

/// Column headers of the fund statistics table
pub mod fund_columns {
    pub const CODE: &str = "基金代號";
    pub const NAME: &str = "基金名稱";
    /// Investment value, stated in ten-thousands
    pub const INVESTMENT_VALUE: &str = "投資價值（萬）";
    pub const HOLDING_COUNT: &str = "持股企業數";
    pub const HIGH_EMITTER_COUNT: &str = "排碳大戶家數";
    pub const HIGH_EMITTER_EMISSIONS: &str = "大戶總碳排量";
    pub const COAL_USER_COUNT: &str = "總燃煤企業數";
}

/// Column header of the coal usage table identifying the company
pub const COAL_COMPANY_COLUMN: &str = "公司";

// =============================================================================
// Aggregation Defaults
// =============================================================================

/// Leading columns of the wide region table that are not regions
/// (company name and the nationwide total)
pub const DEFAULT_REGION_LEADING_COLUMNS: usize = 2;

/// Number of companies kept in the top emitters artifact
pub const DEFAULT_TOP_N: usize = 10;

/// Deepest prefix analysed by the regional coverage report
pub const MAX_COVERAGE_DEPTH: usize = 5;

/// Length of a canonical tax identifier
pub const TAX_ID_LENGTH: usize = 8;

/// Curated geographic ordering of Taiwan's administrative regions
///
/// Region names outside this list are dropped from the region list artifact.
pub const REGION_ORDER: &[&str] = &[
    "基隆市",
    "臺北市",
    "新北市",
    "桃園市",
    "新竹市",
    "新竹縣",
    "苗栗縣",
    "臺中市",
    "彰化縣",
    "南投縣",
    "雲林縣",
    "嘉義市",
    "嘉義縣",
    "臺南市",
    "高雄市",
    "屏東縣",
    "宜蘭縣",
    "花蓮縣",
    "臺東縣",
    "澎湖縣",
    "金門縣",
    "連江縣",
];

// =============================================================================
// Environment and Config
// =============================================================================

/// Environment variable overriding the input directory
pub const ENV_INPUT_DIR: &str = "EMISSIONS_INPUT_DIR";

/// Environment variable overriding the output directory
pub const ENV_OUTPUT_DIR: &str = "EMISSIONS_OUTPUT_DIR";

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "emissions-processor";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.json";
