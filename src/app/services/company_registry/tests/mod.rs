//! Shared test utilities and fixtures for company registry tests

use crate::app::models::RawTable;
use crate::app::services::csv_parser::parse_table;


/// All-companies table: short name, tax identifier, full name
pub fn create_all_companies_table() -> RawTable {
    parse_table(
        "公司,統編,公司全名\n\
         台泥,1100001,台灣水泥股份有限公司\n\
         中鋼,75370905,中國鋼鐵股份有限公司\n\
         ,99999999,無名公司\n\
         台電,03795904,台灣電力股份有限公司\n\
         台電,03795904,台灣電力公司\n",
    )
}

/// Company detail table: tax identifier, representative region
pub fn create_company_detail_table() -> RawTable {
    parse_table(
        "統編,代表縣市\n\
         01100001,臺北市\n\
         75370905,高雄市\n\
         12345678,\n",
    )
}
