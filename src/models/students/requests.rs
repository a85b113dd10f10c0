use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::models::common::PaginationQuery;
use crate::models::common::serde_helpers::{deserialize_nullable_i64, deserialize_optional_i64};
use crate::utils::validate::require_non_blank;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub class_id: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub user_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub class_id: Option<i64>,
}

impl CreateStudentRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("first_name", &self.first_name)?;
        require_non_blank("last_name", &self.last_name)
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_i64")]
    pub user_id: Option<Option<i64>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_i64")]
    pub class_id: Option<Option<i64>>,
}

impl UpdateStudentRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.first_name {
            require_non_blank("first_name", name)?;
        }
        if let Some(name) = &self.last_name {
            require_non_blank("last_name", name)?;
        }
        Ok(())
    }
}

/// 分班或退班，`class_id` 为空表示移出当前班级
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct EnrollmentRequest {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub class_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_distinguishes_clear_from_keep() {
        let keep: UpdateStudentRequest =
            serde_json::from_str(r#"{"first_name": "Yusuf"}"#).unwrap();
        assert_eq!(keep.class_id, None);

        let clear: UpdateStudentRequest = serde_json::from_str(r#"{"class_id": null}"#).unwrap();
        assert_eq!(clear.class_id, Some(None));
    }

    #[test]
    fn test_enrollment_accepts_string_id() {
        let req: EnrollmentRequest = serde_json::from_str(r#"{"class_id": "9"}"#).unwrap();
        assert_eq!(req.class_id, Some(9));
        let req: EnrollmentRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.class_id, None);
    }
}
