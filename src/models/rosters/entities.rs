use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 每周循环的一节课
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct Roster {
    pub id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub classroom_id: i64,
    // 英文星期名，如 "Monday"；为空时排在一周的第一天
    pub day_of_week: Option<String>,
    // HH:MM
    pub start_time: String,
    pub end_time: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
