//! Tests for aggregators


use crate::app::models::{CompanyRecord, RawRow};

/// Build a company record from `(field, value)` pairs
pub fn record(pairs: &[(&str, &str)]) -> CompanyRecord {
    CompanyRecord::from_row(&RawRow::from_pairs(pairs.iter().copied()))
}

/// Wide company × region table: company, nationwide total, then regions
pub fn create_region_csv() -> &'static str {
    "公司,全台,臺北市,高雄市,新竹縣,連江縣\n\
     台泥,\"1,300\",\"1,000\",300,,0\n\
     中鋼,700,,600,100,\n\
     台電,50,N/A,50,-5,0\n"
}
