use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/finance.ts")]
pub enum FinanceKind {
    Income,
    Expense,
}

impl std::fmt::Display for FinanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinanceKind::Income => write!(f, "income"),
            FinanceKind::Expense => write!(f, "expense"),
        }
    }
}

impl std::str::FromStr for FinanceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(FinanceKind::Income),
            "expense" => Ok(FinanceKind::Expense),
            _ => Err(format!("Invalid finance kind: {s}")),
        }
    }
}

/// 收支流水，金额以分为单位存储
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/finance.ts")]
pub struct FinancialLog {
    pub id: i64,
    // 学费等与学生相关的流水
    pub student_id: Option<i64>,
    pub kind: FinanceKind,
    pub category: String,
    pub amount_cents: i64,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
