use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct Assessment {
    pub id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub name: String,
    // exam、quiz、assignment 等，自由文本
    pub kind: String,
    pub date: NaiveDate,
    pub max_score: f64,
    pub weight: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
