use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/finance.ts")]
pub struct FinanceSummary {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub income_cents: i64,
    pub expense_cents: i64,
    // income - expense
    pub balance_cents: i64,
}
