//! Tests for registry-based enrichment

use super::{company, create_test_registry};
use crate::app::models::LookupFailure;
use crate::app::services::record_merger::enrich;

#[test]
fn test_full_enrichment_appends_fields() {
    let registry = create_test_registry();
    let records = vec![company("台泥")];

    let result = enrich(&records, &registry);
    let record = &result.records[0];

    assert_eq!(record.get("公司全名"), Some("台灣水泥股份有限公司"));
    assert_eq!(record.get("統編"), Some("01100001"));
    assert_eq!(record.get("代表縣市"), Some("臺北市"));
    assert!(result.notes.is_empty());
    assert_eq!(result.stats.fully_enriched, 1);
}

#[test]
fn test_partial_enrichment_keeps_found_fields() {
    let registry = create_test_registry();
    let result = enrich(&[company("中鋼")], &registry);
    let record = &result.records[0];

    assert_eq!(record.get("統編"), Some("75370905"));
    assert_eq!(record.get("代表縣市"), None);
    assert_eq!(
        result.notes[0].failure,
        LookupFailure::RegionNotFound {
            tax_id: "75370905".to_string()
        }
    );
    assert_eq!(result.stats.region_misses, 1);
}

#[test]
fn test_unknown_company_is_left_unchanged() {
    let registry = create_test_registry();
    let records = vec![company("不存在")];

    let result = enrich(&records, &registry);

    assert_eq!(result.records, records);
    assert_eq!(result.notes[0].company, "不存在");
    assert_eq!(result.notes[0].failure, LookupFailure::TaxIdNotFound);
}

#[test]
fn test_blank_tax_id_counts_as_tax_id_miss() {
    let registry = create_test_registry();
    let result = enrich(&[company("台電")], &registry);
    let record = &result.records[0];

    assert_eq!(record.get("公司全名"), Some("台灣電力股份有限公司"));
    assert_eq!(record.get("統編"), None);
    assert_eq!(result.stats.tax_id_misses, 1);
}

#[test]
fn test_enrichment_preserves_count_and_order() {
    let registry = create_test_registry();
    let records = vec![company("中鋼"), company("不存在"), company("台泥")];

    let result = enrich(&records, &registry);
    let names: Vec<&str> = result.records.iter().map(|r| r.value("公司")).collect();

    assert_eq!(names, vec!["中鋼", "不存在", "台泥"]);
    assert_eq!(result.notes.len(), 2);
    assert_eq!(result.stats.total_records, 3);
}
