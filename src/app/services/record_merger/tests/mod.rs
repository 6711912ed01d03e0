//! Tests for the join/merge engine

pub mod enrichment_tests;

use crate::app::models::{CompanyRecord, RawRow};
use crate::app::services::company_registry::CompanyRegistry;
use crate::app::services::csv_parser::parse_table;

/// Build a row from `(header, value)` pairs
pub fn row(pairs: &[(&str, &str)]) -> RawRow {
    RawRow::from_pairs(pairs.iter().copied())
}

/// Build a record carrying only a short name
pub fn company(short_name: &str) -> CompanyRecord {
    CompanyRecord::from_row(&row(&[("公司", short_name), ("產業分類", "水泥")]))
}

/// Registry where 台泥 resolves fully, 中鋼 lacks a region and 台電 lacks a tax id
pub fn create_test_registry() -> CompanyRegistry {
    let all_companies = parse_table(
        "公司,統編,公司全名\n\
         台泥,1100001,台灣水泥股份有限公司\n\
         中鋼,75370905,中國鋼鐵股份有限公司\n\
         台電,,台灣電力股份有限公司\n",
    );
    let company_detail = parse_table("統編,代表縣市\n01100001,臺北市\n");
    CompanyRegistry::from_tables(&all_companies, &company_detail)
}
