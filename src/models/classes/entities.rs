use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    pub id: i64,
    pub name: String,
    pub course_id: Option<i64>,
    // 班主任（教师 ID），一名教师最多担任一个班的班主任
    pub mentor_id: Option<i64>,
    pub school_year_id: Option<i64>,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
