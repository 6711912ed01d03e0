//! Tests for artifact building

use super::create_test_workspace;
use crate::app::services::pipeline::{
    ProgressReporter, RenderedArtifact, build_artifacts, load_sources, required_tables,
};
use crate::config::Artifact;
use serde_json::{Value, json};

fn build(artifacts: &[Artifact]) -> Vec<RenderedArtifact> {
    let (_temp_dir, config) = create_test_workspace();
    let progress = ProgressReporter::disabled();
    let sources = load_sources(&config, &required_tables(artifacts), &progress).unwrap();
    build_artifacts(&config, &sources, artifacts, &progress)
        .unwrap()
        .rendered
}

fn parse(rendered: &RenderedArtifact) -> Value {
    serde_json::from_str(&rendered.json).unwrap()
}

#[test]
fn test_company_list_is_merged_and_enriched() {
    let rendered = build(&[Artifact::CompanyList]);
    let companies = parse(&rendered[0]);

    assert_eq!(rendered[0].entries, 3);
    assert_eq!(companies[0]["公司"], "台泥");
    assert_eq!(companies[0]["溫室氣體排放量（公噸二氧化碳當量）"], "2,500");
    assert_eq!(companies[0]["用電量"], "100");
    assert_eq!(companies[0]["代表縣市"], "臺北市");
    assert_eq!(companies[0]["統編"], "01100001");
    assert!(companies[2].get("代表縣市").is_none());
}

#[test]
fn test_company_list_keeps_field_order() {
    let rendered = build(&[Artifact::CompanyList]);
    let first_object = rendered[0].json.find('{').unwrap();
    let json = &rendered[0].json[first_object..];

    let position = |key: &str| json.find(&format!("\"{key}\"")).unwrap();
    assert!(position("公司") < position("產業分類"));
    assert!(position("產業分類") < position("溫室氣體排放量（公噸二氧化碳當量）"));
    assert!(position("溫室氣體排放量（公噸二氧化碳當量）") < position("用電量"));
    assert!(position("用電量") < position("公司全名"));
}

#[test]
fn test_region_emissions_artifact() {
    let rendered = build(&[Artifact::RegionEmissions]);

    assert_eq!(
        parse(&rendered[0]),
        json!([
            { "縣市": "高雄市", "總排放量": 1400, "總排放量佔比": 70, "企業數": 2 },
            { "縣市": "臺北市", "總排放量": 600, "總排放量佔比": 30, "企業數": 1 }
        ])
    );
}

#[test]
fn test_lookup_artifacts() {
    let rendered = build(&[
        Artifact::RegionList,
        Artifact::IndustryList,
        Artifact::TopEmitters,
    ]);

    assert_eq!(parse(&rendered[0]), json!(["臺北市", "高雄市"]));
    assert_eq!(
        parse(&rendered[1]),
        json!([
            { "產業分類": "水泥", "企業數": 2 },
            { "產業分類": "鋼鐵", "企業數": 1 }
        ])
    );

    let top = parse(&rendered[2]);
    assert_eq!(top.as_array().unwrap().len(), 2);
    assert_eq!(top[0]["公司"], "中鋼");
    assert_eq!(top[1]["公司"], "台泥");
}

#[test]
fn test_table_artifacts() {
    let rendered = build(&[Artifact::GradeMap, Artifact::FundList, Artifact::CoalUsageMap]);

    assert_eq!(
        parse(&rendered[0]),
        json!({ "用電量": [{ "label": "高", "min": 100 }, { "label": "低", "max": 99 }] })
    );
    assert_eq!(
        parse(&rendered[1]),
        json!([{
            "基金代號": "0050",
            "基金名稱": "元大台灣50",
            "總市值": 100,
            "排碳大戶家數": 1,
            "排碳大戶佔比": 25,
            "排碳大戶總碳排量": 7500,
            "使用燃煤家數": 1
        }])
    );
    assert_eq!(
        parse(&rendered[2]),
        json!({ "台泥": [{ "year": 2022, "value": 10 }] })
    );
}

#[test]
fn test_json_is_two_space_pretty_printed() {
    let rendered = build(&[Artifact::RegionList]);
    assert_eq!(rendered[0].json, "[\n  \"臺北市\",\n  \"高雄市\"\n]");
}
