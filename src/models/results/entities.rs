use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学生在某次考核中的成绩，(assessment_id, student_id) 唯一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct AssessmentResult {
    pub id: i64,
    pub assessment_id: i64,
    pub student_id: i64,
    pub score: f64,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
