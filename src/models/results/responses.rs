use serde::Serialize;
use ts_rs::TS;

use super::entities::AssessmentResult;

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct BulkResultResponse {
    pub assessment_id: i64,
    pub items: Vec<AssessmentResult>,
}

/// 批量保存中第一条无效的行，`index` 为其在 `entries` 中的位置
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct BulkResultError {
    pub index: usize,
    pub student_id: i64,
    pub message: String,
}

/// 批量保存的结果：全部写入，或因某一行无效而整体放弃
#[derive(Debug, Clone)]
pub enum BulkSaveOutcome {
    Saved(Vec<AssessmentResult>),
    Rejected(BulkResultError),
}
