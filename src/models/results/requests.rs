use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::models::common::PaginationQuery;
use crate::models::common::serde_helpers::{deserialize_optional_i64, deserialize_string_to_i64};

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct ResultListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub assessment_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub student_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct CreateResultRequest {
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub assessment_id: i64,
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub student_id: i64,
    pub score: f64,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct UpdateResultRequest {
    pub score: Option<f64>,
    pub comment: Option<String>,
}

/// 整张成绩单一次提交
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct BulkResultRequest {
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub assessment_id: i64,
    pub entries: Vec<BulkResultEntry>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct BulkResultEntry {
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub student_id: i64,
    pub score: f64,
    pub comment: Option<String>,
}

/// 分数必须落在 `0..=max_score`
pub fn check_score(score: f64, max_score: f64) -> Result<()> {
    if !score.is_finite() || score < 0.0 || score > max_score {
        return Err(SchoolAdminError::validation(format!(
            "score {score} must be between 0 and {max_score}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds() {
        assert!(check_score(0.0, 100.0).is_ok());
        assert!(check_score(100.0, 100.0).is_ok());
        assert!(check_score(100.5, 100.0).is_err());
        assert!(check_score(-1.0, 100.0).is_err());
        assert!(check_score(f64::NAN, 100.0).is_err());
    }

    #[test]
    fn test_bulk_entries_accept_string_ids() {
        let req: BulkResultRequest = serde_json::from_str(
            r#"{"assessment_id": "3", "entries": [{"student_id": "7", "score": 88.5}]}"#,
        )
        .unwrap();
        assert_eq!(req.assessment_id, 3);
        assert_eq!(req.entries[0].student_id, 7);
        assert!(req.entries[0].comment.is_none());
    }
}
