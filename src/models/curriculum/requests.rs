use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::models::common::PaginationQuery;
use crate::models::common::serde_helpers::{
    deserialize_nullable_i64, deserialize_optional_i64, deserialize_string_to_i64,
};
use crate::utils::validate::normalize_name;

// ---------- 课程 ----------

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/curriculum.ts")]
pub struct CourseListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/curriculum.ts")]
pub struct CreateCourseRequest {
    pub name: String,
    pub description: Option<String>,
}

impl CreateCourseRequest {
    pub fn normalize(&mut self) -> Result<()> {
        self.name = normalize_name("name", &self.name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/curriculum.ts")]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateCourseRequest {
    pub fn normalize(&mut self) -> Result<()> {
        if let Some(name) = &self.name {
            self.name = Some(normalize_name("name", name)?);
        }
        Ok(())
    }
}

// ---------- 模块 ----------

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/curriculum.ts")]
pub struct ModuleListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub course_id: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/curriculum.ts")]
pub struct CreateModuleRequest {
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub course_id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl CreateModuleRequest {
    pub fn normalize(&mut self) -> Result<()> {
        self.name = normalize_name("name", &self.name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/curriculum.ts")]
pub struct UpdateModuleRequest {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub course_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateModuleRequest {
    pub fn normalize(&mut self) -> Result<()> {
        if let Some(name) = &self.name {
            self.name = Some(normalize_name("name", name)?);
        }
        Ok(())
    }
}

// ---------- 科目 ----------

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/curriculum.ts")]
pub struct SubjectListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub module_id: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/curriculum.ts")]
pub struct CreateSubjectRequest {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub module_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
}

impl CreateSubjectRequest {
    pub fn normalize(&mut self) -> Result<()> {
        self.name = normalize_name("name", &self.name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/curriculum.ts")]
pub struct UpdateSubjectRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_i64")]
    pub module_id: Option<Option<i64>>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateSubjectRequest {
    pub fn normalize(&mut self) -> Result<()> {
        if let Some(name) = &self.name {
            self.name = Some(normalize_name("name", name)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_trimmed() {
        let mut req: CreateCourseRequest =
            serde_json::from_str(r#"{"name": "  Tahfidz  "}"#).unwrap();
        req.normalize().unwrap();
        assert_eq!(req.name, "Tahfidz");
    }

    #[test]
    fn test_module_requires_course() {
        assert!(serde_json::from_str::<CreateModuleRequest>(r#"{"name": "Tajweed"}"#).is_err());
        let req: CreateModuleRequest =
            serde_json::from_str(r#"{"course_id": "2", "name": "Tajweed"}"#).unwrap();
        assert_eq!(req.course_id, 2);
    }

    #[test]
    fn test_blank_subject_name_rejected() {
        let mut req = UpdateSubjectRequest {
            name: Some("   ".into()),
            ..Default::default()
        };
        assert!(req.normalize().is_err());
    }
}
