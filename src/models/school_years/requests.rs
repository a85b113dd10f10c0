use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::models::common::PaginationQuery;
use crate::utils::validate::normalize_name;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school_year.ts")]
pub struct SchoolYearListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school_year.ts")]
pub struct CreateSchoolYearRequest {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub is_active: bool,
}

impl CreateSchoolYearRequest {
    pub fn normalize(&mut self) -> Result<()> {
        self.name = normalize_name("name", &self.name)?;
        check_date_order(self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/school_year.ts")]
pub struct UpdateSchoolYearRequest {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

impl UpdateSchoolYearRequest {
    pub fn normalize(&mut self) -> Result<()> {
        if let Some(name) = &self.name {
            self.name = Some(normalize_name("name", name)?);
        }
        Ok(())
    }
}

/// 学年的开始日期必须早于结束日期
pub fn check_date_order(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start >= end {
        return Err(SchoolAdminError::validation(
            "start_date must be before end_date",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_dates_rejected() {
        let mut req: CreateSchoolYearRequest = serde_json::from_str(
            r#"{"name": "2024/2025", "start_date": "2025-06-30", "end_date": "2024-07-01"}"#,
        )
        .unwrap();
        assert!(req.normalize().is_err());
    }

    #[test]
    fn test_active_defaults_to_false() {
        let mut req: CreateSchoolYearRequest = serde_json::from_str(
            r#"{"name": " 2024/2025 ", "start_date": "2024-07-01", "end_date": "2025-06-30"}"#,
        )
        .unwrap();
        req.normalize().unwrap();
        assert!(!req.is_active);
        assert_eq!(req.name, "2024/2025");
    }
}
