use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use crate::calendar::{normalize_day_of_week, validate_time_range};
use crate::errors::Result;
use crate::models::common::PaginationQuery;
use crate::models::common::serde_helpers::{
    deserialize_optional_day_of_week, deserialize_optional_i64,
    deserialize_string_to_i64,
};

/// 排课筛选条件，列表与日历视图共用
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct RosterFilters {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub class_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub subject_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub teacher_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub classroom_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_day_of_week")]
    pub day_of_week: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct RosterListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(flatten)]
    #[ts(flatten)]
    pub filters: RosterFilters,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct RosterCalendarParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub filters: RosterFilters,
    /// 该日期所在的周，缺省为本周
    pub week_of: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct CreateRosterRequest {
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub class_id: i64,
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub subject_id: i64,
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub teacher_id: i64,
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub classroom_id: i64,
    #[serde(default, deserialize_with = "deserialize_optional_day_of_week")]
    pub day_of_week: Option<String>,
    pub start_time: String,
    pub end_time: String,
}

impl CreateRosterRequest {
    /// 星期（如有）转为英文名，时间转为 `HH:MM`，并检查开始早于结束
    pub fn normalize(&mut self) -> Result<()> {
        if let Some(day) = &self.day_of_week {
            self.day_of_week = Some(normalize_day_of_week(day)?);
        }
        let (start, end) = validate_time_range(&self.start_time, &self.end_time)?;
        self.start_time = start;
        self.end_time = end;
        Ok(())
    }
}

/// 部分更新；时间段合并现有记录后在存储层统一校验
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct UpdateRosterRequest {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub class_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub subject_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub teacher_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub classroom_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_day_of_week")]
    pub day_of_week: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl UpdateRosterRequest {
    pub fn normalize(&mut self) -> Result<()> {
        if let Some(day) = &self.day_of_week {
            self.day_of_week = Some(normalize_day_of_week(day)?);
        }
        Ok(())
    }
}

/// 日历拖拽后的新时间段，格式 `YYYY-MM-DDTHH:MM`
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct MoveRosterRequest {
    pub start: String,
    pub end: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_normalizes_slot() {
        let mut req: CreateRosterRequest = serde_json::from_str(
            r#"{"class_id": "1", "subject_id": 2, "teacher_id": 3, "classroom_id": 4,
                "day_of_week": 3, "start_time": " 09:00", "end_time": "10:30:00"}"#,
        )
        .unwrap();
        req.normalize().unwrap();
        assert_eq!(req.day_of_week.as_deref(), Some("Wednesday"));
        assert_eq!(req.start_time, "09:00");
        assert_eq!(req.end_time, "10:30");
    }

    #[test]
    fn test_create_without_day_keeps_it_empty() {
        for body in [
            r#"{"class_id": 1, "subject_id": 2, "teacher_id": 3, "classroom_id": 4,
                "start_time": "09:00", "end_time": "10:00"}"#,
            r#"{"class_id": 1, "subject_id": 2, "teacher_id": 3, "classroom_id": 4,
                "day_of_week": "", "start_time": "09:00", "end_time": "10:00"}"#,
        ] {
            let mut req: CreateRosterRequest = serde_json::from_str(body).unwrap();
            req.normalize().unwrap();
            assert!(req.day_of_week.is_none());
        }
    }

    #[test]
    fn test_create_rejects_inverted_times() {
        let mut req: CreateRosterRequest = serde_json::from_str(
            r#"{"class_id": 1, "subject_id": 2, "teacher_id": 3, "classroom_id": 4,
                "day_of_week": "friday", "start_time": "11:00", "end_time": "10:00"}"#,
        )
        .unwrap();
        assert!(req.normalize().is_err());
    }

    #[test]
    fn test_update_normalizes_day_only_when_present() {
        let mut req: UpdateRosterRequest =
            serde_json::from_str(r#"{"day_of_week": "7"}"#).unwrap();
        req.normalize().unwrap();
        assert_eq!(req.day_of_week.as_deref(), Some("Sunday"));

        let mut req = UpdateRosterRequest::default();
        req.normalize().unwrap();
        assert!(req.day_of_week.is_none());
    }
}
