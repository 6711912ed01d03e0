//! Tests for pipeline orchestration
//!
//! Fixtures write a complete, small set of source tables into a temporary
//! input directory under their default file names.

pub mod processor_tests;
pub mod writer_tests;

use crate::config::Config;
use crate::constants::source_files;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const BASIC_CSV: &str = "\u{feff}公司,產業分類,溫室氣體排放量（公噸二氧化碳當量）\r\n\
台泥,水泥,\"2,000\"\r\n\
中鋼,鋼鐵,\"5,000\"\r\n\
小廠,水泥,\r\n";

pub const ADVANCED_CSV: &str = "公司,溫室氣體排放量（公噸二氧化碳當量）,用電量\n\
台泥,\"2,500\",100\n\
其他,1,1\n";

pub const GRADE_CSV: &str = "欄位名稱,分級名稱,最小值,最大值\n\
用電量,高,100,\n\
用電量,低,,99\n";

pub const ALL_COMPANIES_CSV: &str = "公司,統編,公司全名\n\
台泥,1100001,台灣水泥股份有限公司\n\
中鋼,75370905,中國鋼鐵股份有限公司\n";

pub const COMPANY_DETAIL_CSV: &str = "統編,代表縣市\n\
01100001,臺北市\n\
75370905,高雄市\n";

pub const REGION_CSV: &str = "公司,全台,臺北市,高雄市,花蓮縣\n\
台泥,\"1,000\",600,400,0\n\
中鋼,\"1,000\",,\"1,000\",\n";

pub const COAL_CSV: &str = "公司,2022,2021\n\
台泥,10,\n\
中鋼,,\n";

pub const FUND_CSV: &str =
    "基金代號,基金名稱,投資價值（萬）,持股企業數,排碳大戶家數,大戶總碳排量,總燃煤企業數\n\
0050,元大台灣50,\"$10,000\",4,1,\"7,500\",1\n";

/// Write every source table into `dir`
pub fn write_all_sources(dir: &Path) {
    let files = [
        (source_files::BASIC_COMPANIES, BASIC_CSV),
        (source_files::ADVANCED_COMPANIES, ADVANCED_CSV),
        (source_files::GRADE_DEFINITIONS, GRADE_CSV),
        (source_files::ALL_COMPANIES, ALL_COMPANIES_CSV),
        (source_files::COMPANY_DETAIL, COMPANY_DETAIL_CSV),
        (source_files::REGION_EMISSIONS, REGION_CSV),
        (source_files::COAL_USAGE, COAL_CSV),
        (source_files::FUND_STATISTICS, FUND_CSV),
    ];
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

/// Temporary input and output directories with a config pointing at them
pub fn create_test_workspace() -> (TempDir, Config) {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("raw-data");
    fs::create_dir_all(&input_dir).unwrap();
    write_all_sources(&input_dir);

    let config = Config {
        input_dir,
        output_dir: temp_dir.path().join("out"),
        ..Config::default()
    };
    (temp_dir, config)
}
