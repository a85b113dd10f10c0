use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::models::common::PaginationQuery;
use crate::models::common::serde_helpers::{
    deserialize_nullable_i64, deserialize_optional_i64, deserialize_string_to_i64,
};

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/absence.ts")]
pub struct AbsenceListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub roster_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub student_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub teacher_id: Option<i64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/absence.ts")]
pub struct CreateAbsenceRequest {
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub roster_id: i64,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub student_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub teacher_id: Option<i64>,
    pub date: NaiveDate,
    pub reason: Option<String>,
    #[serde(default)]
    pub excused: bool,
}

impl CreateAbsenceRequest {
    pub fn validate(&self) -> Result<()> {
        check_single_subject(self.student_id, self.teacher_id)
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/absence.ts")]
pub struct UpdateAbsenceRequest {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub roster_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_nullable_i64")]
    pub student_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_nullable_i64")]
    pub teacher_id: Option<Option<i64>>,
    pub date: Option<NaiveDate>,
    pub reason: Option<String>,
    pub excused: Option<bool>,
}

impl UpdateAbsenceRequest {
    /// 是否会把记录变为教师缺勤
    pub fn sets_teacher(&self) -> bool {
        matches!(self.teacher_id, Some(Some(_)))
    }
}

/// 缺勤对象必须且只能是学生或教师之一
pub fn check_single_subject(student_id: Option<i64>, teacher_id: Option<i64>) -> Result<()> {
    match (student_id, teacher_id) {
        (Some(_), None) | (None, Some(_)) => Ok(()),
        (None, None) => Err(SchoolAdminError::validation(
            "Either student_id or teacher_id is required",
        )),
        (Some(_), Some(_)) => Err(SchoolAdminError::validation(
            "An absence belongs to a student or a teacher, not both",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_subject() {
        assert!(check_single_subject(Some(1), None).is_ok());
        assert!(check_single_subject(None, Some(2)).is_ok());
        assert!(check_single_subject(None, None).is_err());
        assert!(check_single_subject(Some(1), Some(2)).is_err());
    }

    #[test]
    fn test_update_detects_teacher_assignment() {
        let req: UpdateAbsenceRequest = serde_json::from_str(r#"{"teacher_id": "5"}"#).unwrap();
        assert!(req.sets_teacher());
        let req: UpdateAbsenceRequest = serde_json::from_str(r#"{"teacher_id": null}"#).unwrap();
        assert!(!req.sets_teacher());
    }
}
