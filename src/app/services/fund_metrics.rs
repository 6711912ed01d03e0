//! Fund-level holding metrics
//!
//! Unlike the aggregators, fund counts default absent values to 0 so that
//! every fund row yields a comparable record.

use crate::app::models::{FundRecord, RawRow, RawTable};
use crate::app::services::numeric::{parse_currency, share_percent};
use crate::constants::fund_columns;
use tracing::debug;

/// Currency-aware parse with absent → 0
fn amount(row: &RawRow, column: &str) -> f64 {
    parse_currency(row.value(column)).unwrap_or(0.0)
}

/// Compute one fund's metrics
pub fn fund_record(row: &RawRow) -> FundRecord {
    let investment_value = amount(row, fund_columns::INVESTMENT_VALUE);
    let holdings = amount(row, fund_columns::HOLDING_COUNT);
    let high_emitters = amount(row, fund_columns::HIGH_EMITTER_COUNT);

    FundRecord {
        code: row.value(fund_columns::CODE).to_string(),
        name: row.value(fund_columns::NAME).to_string(),
        total_market_value_million: (investment_value / 100.0).round() as i64,
        high_emitter_count: high_emitters,
        high_emitter_share_percent: share_percent(high_emitters, Some(holdings)),
        high_emitter_total_emissions: amount(row, fund_columns::HIGH_EMITTER_EMISSIONS),
        coal_user_count: amount(row, fund_columns::COAL_USER_COUNT),
    }
}

/// Compute metrics for every fund row, independently and in order
pub fn fund_list(table: &RawTable) -> Vec<FundRecord> {
    let funds: Vec<FundRecord> = table.rows.iter().map(fund_record).collect();
    debug!("Computed metrics for {} funds", funds.len());
    funds
}
