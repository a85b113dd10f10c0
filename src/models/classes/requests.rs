use serde::Deserialize;
use ts_rs::TS;

use crate::errors::Result;
use crate::models::common::PaginationQuery;
use crate::models::common::serde_helpers::{deserialize_nullable_i64, deserialize_optional_i64};
use crate::utils::validate::normalize_name;

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub course_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub mentor_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub school_year_id: Option<i64>,
    pub search: Option<String>,
}

// 创建班级请求
//
// 指定 mentor_id 时，该教师在其他班级的班主任身份会被同时撤销
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub course_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub mentor_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub school_year_id: Option<i64>,
    pub description: Option<String>,
}

impl CreateClassRequest {
    pub fn normalize(&mut self) -> Result<()> {
        self.name = normalize_name("name", &self.name)?;
        Ok(())
    }
}

// 更新班级请求，ID 字段传 null 表示解除关联
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_i64")]
    pub course_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_nullable_i64")]
    pub mentor_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "deserialize_nullable_i64")]
    pub school_year_id: Option<Option<i64>>,
    pub description: Option<String>,
}

impl UpdateClassRequest {
    pub fn normalize(&mut self) -> Result<()> {
        if let Some(name) = &self.name {
            self.name = Some(normalize_name("name", name)?);
        }
        Ok(())
    }
}
