//! Test utilities for CSV parser testing
//!
//! Shared fixtures mirroring the shape of the spreadsheet exports.

use std::io::Write;
use tempfile::NamedTempFile;


/// Helper to create a small company table with CRLF endings and quoting
pub fn create_company_csv() -> String {
    [
        "公司,產業分類,溫室氣體排放量（公噸二氧化碳當量）",
        "台泥,水泥,\"1,234,567\"",
        "",
        "   ",
        "\"中鋼, 股份\",鋼鐵,\"say \"\"hi\"\"\"",
        "台電,電力",
    ]
    .join("\r\n")
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
