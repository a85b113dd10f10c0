use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 缺勤记录，学生缺勤与教师缺勤二选一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/absence.ts")]
pub struct Absence {
    pub id: i64,
    pub roster_id: i64,
    pub student_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub date: NaiveDate,
    pub reason: Option<String>,
    pub excused: bool,
    // 记录人（用户 ID）
    pub recorded_by: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Absence {
    pub fn is_teacher_absence(&self) -> bool {
        self.teacher_id.is_some()
    }
}
