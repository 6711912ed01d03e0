//! End-to-end tests for the emissions pipeline
//!
//! These tests write a small set of raw CSV exports into a temporary
//! directory, run the pipeline through the public API, and check the JSON
//! artifacts that land on disk.

use emissions_processor::Config;
use emissions_processor::app::services::pipeline::Pipeline;
use emissions_processor::config::Artifact;
use emissions_processor::constants::{output_files, source_files};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BASIC_CSV: &str = "\u{feff}公司,產業分類,溫室氣體排放量（公噸二氧化碳當量）\r\n\
台泥,水泥,\"2,000\"\r\n\
中鋼,鋼鐵,\"5,000\"\r\n";

const ADVANCED_CSV: &str = "公司,溫室氣體排放量（公噸二氧化碳當量）,用電量\n\
台泥,\"2,500\",100\n";

const GRADE_CSV: &str = "欄位名稱,分級名稱,最小值,最大值\n\
用電量,高,100,\n";

const ALL_COMPANIES_CSV: &str = "公司,統編,公司全名\n\
台泥,1100001,台灣水泥股份有限公司\n\
中鋼,75370905,中國鋼鐵股份有限公司\n";

const COMPANY_DETAIL_CSV: &str = "統編,代表縣市\n\
01100001,臺北市\n";

const REGION_CSV: &str = "公司,全台,臺北市,高雄市\n\
台泥,\"1,000\",600,400\n\
中鋼,\"1,000\",,\"1,000\"\n";

const COAL_CSV: &str = "公司,2022,2021\n\
台泥,10,\n";

const FUND_CSV: &str =
    "基金代號,基金名稱,投資價值（萬）,持股企業數,排碳大戶家數,大戶總碳排量,總燃煤企業數\n\
0050,元大台灣50,\"$10,000\",4,1,\"7,500\",1\n";

fn write_sources(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    for (name, content) in [
        (source_files::BASIC_COMPANIES, BASIC_CSV),
        (source_files::ADVANCED_COMPANIES, ADVANCED_CSV),
        (source_files::GRADE_DEFINITIONS, GRADE_CSV),
        (source_files::ALL_COMPANIES, ALL_COMPANIES_CSV),
        (source_files::COMPANY_DETAIL, COMPANY_DETAIL_CSV),
        (source_files::REGION_EMISSIONS, REGION_CSV),
        (source_files::COAL_USAGE, COAL_CSV),
        (source_files::FUND_STATISTICS, FUND_CSV),
    ] {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn workspace() -> (TempDir, Config) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        input_dir: temp_dir.path().join("raw-data"),
        output_dir: temp_dir.path().join("data"),
        ..Config::default()
    };
    write_sources(&config.input_dir);
    (temp_dir, config)
}

fn read_json(config: &Config, file_name: &str) -> Value {
    let content = fs::read_to_string(config.output_dir.join(file_name)).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_full_run_writes_every_artifact() {
    let (_temp_dir, config) = workspace();
    let mut pipeline = Pipeline::new(config.clone());

    let report = pipeline.run(&Artifact::ALL, false).unwrap();

    assert!(report.written);
    assert_eq!(report.artifacts.len(), Artifact::ALL.len());
    for artifact in Artifact::ALL {
        assert!(config.output_path(artifact).exists(), "missing {}", artifact);
    }
}

#[test]
fn test_company_list_merges_and_enriches() {
    let (_temp_dir, config) = workspace();
    Pipeline::new(config.clone())
        .run(&[Artifact::CompanyList], false)
        .unwrap();

    let companies = read_json(&config, output_files::COMPANY_LIST);
    let companies = companies.as_array().unwrap();
    assert_eq!(companies.len(), 2);

    // advanced values overlay basic ones; zero-padded tax id joins the detail table
    let cement = &companies[0];
    assert_eq!(cement["公司"], "台泥");
    assert_eq!(cement["溫室氣體排放量（公噸二氧化碳當量）"], "2,500");
    assert_eq!(cement["用電量"], "100");
    assert_eq!(cement["公司全名"], "台灣水泥股份有限公司");
    assert_eq!(cement["統編"], "01100001");
    assert_eq!(cement["代表縣市"], "臺北市");

    // region lookup misses leave the record without a region
    let steel = &companies[1];
    assert_eq!(steel["統編"], "75370905");
    assert!(steel.get("代表縣市").is_none());
}

#[test]
fn test_region_emissions_and_funds() {
    let (_temp_dir, config) = workspace();
    Pipeline::new(config.clone())
        .run(&[Artifact::RegionEmissions, Artifact::FundList], false)
        .unwrap();

    let regions = read_json(&config, output_files::REGION_EMISSIONS);
    assert_eq!(
        regions,
        json!([
            {"縣市": "高雄市", "總排放量": 1400, "總排放量佔比": 70, "企業數": 2},
            {"縣市": "臺北市", "總排放量": 600, "總排放量佔比": 30, "企業數": 1}
        ])
    );

    let funds = read_json(&config, output_files::FUND_LIST);
    assert_eq!(funds[0]["基金代號"], "0050");
    assert_eq!(funds[0]["總市值"], 100);
    assert_eq!(funds[0]["排碳大戶佔比"], 25);
}

#[test]
fn test_missing_source_writes_nothing() {
    let (_temp_dir, config) = workspace();
    fs::remove_file(config.input_dir.join(source_files::FUND_STATISTICS)).unwrap();

    let result = Pipeline::new(config.clone()).run(&Artifact::ALL, false);

    assert!(result.is_err());
    assert!(!config.output_dir.exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let (_temp_dir, config) = workspace();

    let report = Pipeline::new(config.clone())
        .run(&Artifact::ALL, true)
        .unwrap();

    assert!(!report.written);
    assert!(report.total_bytes() > 0);
    assert!(!config.output_dir.exists());
}
