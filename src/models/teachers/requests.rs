use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::models::common::PaginationQuery;
use crate::models::common::serde_helpers::{deserialize_nullable_i64, deserialize_optional_i64};
use crate::utils::validate::{require_non_blank, validate_email};

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub user_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
}

impl CreateTeacherRequest {
    pub fn validate(&self) -> Result<()> {
        require_non_blank("first_name", &self.first_name)?;
        require_non_blank("last_name", &self.last_name)?;
        if let Some(email) = &self.email {
            validate_email(email).map_err(SchoolAdminError::validation)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_i64")]
    pub user_id: Option<Option<i64>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
}

impl UpdateTeacherRequest {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.first_name {
            require_non_blank("first_name", name)?;
        }
        if let Some(name) = &self.last_name {
            require_non_blank("last_name", name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email).map_err(SchoolAdminError::validation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_names() {
        let req: CreateTeacherRequest =
            serde_json::from_str(r#"{"first_name": " ", "last_name": "Hassan"}"#).unwrap();
        assert!(req.validate().is_err());

        let req: CreateTeacherRequest = serde_json::from_str(
            r#"{"user_id": "4", "first_name": "Amina", "last_name": "Hassan"}"#,
        )
        .unwrap();
        assert_eq!(req.user_id, Some(4));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_rejects_bad_email() {
        let req = UpdateTeacherRequest {
            email: Some("not-an-email".into()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
