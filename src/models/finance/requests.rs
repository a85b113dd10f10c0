use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::FinanceKind;
use crate::errors::{Result, SchoolAdminError};
use crate::models::common::PaginationQuery;
use crate::models::common::serde_helpers::{deserialize_nullable_i64, deserialize_optional_i64};
use crate::utils::validate::require_non_blank;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/finance.ts")]
pub struct FinancialLogListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub kind: Option<FinanceKind>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub student_id: Option<i64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/finance.ts")]
pub struct FinanceSummaryParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/finance.ts")]
pub struct CreateFinancialLogRequest {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub student_id: Option<i64>,
    pub kind: FinanceKind,
    pub category: String,
    pub amount_cents: i64,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl CreateFinancialLogRequest {
    pub fn normalize(&mut self) -> Result<()> {
        require_non_blank("category", &self.category)?;
        self.category = self.category.trim().to_string();
        check_amount(self.amount_cents)
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/finance.ts")]
pub struct UpdateFinancialLogRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_i64")]
    pub student_id: Option<Option<i64>>,
    pub kind: Option<FinanceKind>,
    pub category: Option<String>,
    pub amount_cents: Option<i64>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl UpdateFinancialLogRequest {
    pub fn normalize(&mut self) -> Result<()> {
        if let Some(category) = &self.category {
            require_non_blank("category", category)?;
            self.category = Some(category.trim().to_string());
        }
        match self.amount_cents {
            Some(amount) => check_amount(amount),
            None => Ok(()),
        }
    }
}

// 方向由 kind 表示，金额本身必须为正
fn check_amount(amount_cents: i64) -> Result<()> {
    if amount_cents <= 0 {
        return Err(SchoolAdminError::validation("amount_cents must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_snake_case() {
        let req: CreateFinancialLogRequest = serde_json::from_str(
            r#"{"kind": "expense", "category": "utilities", "amount_cents": 12000,
                "date": "2024-09-01"}"#,
        )
        .unwrap();
        assert_eq!(req.kind, FinanceKind::Expense);
        assert!(serde_json::from_str::<FinanceKind>(r#""Expense""#).is_err());
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut req = UpdateFinancialLogRequest {
            amount_cents: Some(0),
            ..Default::default()
        };
        assert!(req.normalize().is_err());
    }
}
