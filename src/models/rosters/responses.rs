use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

/// 日历中的一节课，`start`/`end` 格式为 `YYYY-MM-DDTHH:MM`
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct RosterEvent {
    pub id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub classroom_id: i64,
    pub day_of_week: String,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct RosterCalendarResponse {
    // 周一
    pub week_start: NaiveDate,
    pub events: Vec<RosterEvent>,
}
