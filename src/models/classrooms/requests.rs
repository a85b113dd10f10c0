use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::models::common::PaginationQuery;
use crate::utils::validate::normalize_name;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct CreateClassroomRequest {
    pub name: String,
    pub capacity: Option<i32>,
    pub location: Option<String>,
}

impl CreateClassroomRequest {
    pub fn normalize(&mut self) -> Result<()> {
        self.name = normalize_name("name", &self.name)?;
        check_capacity(self.capacity)
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct UpdateClassroomRequest {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
}

impl UpdateClassroomRequest {
    pub fn normalize(&mut self) -> Result<()> {
        if let Some(name) = &self.name {
            self.name = Some(normalize_name("name", name)?);
        }
        check_capacity(self.capacity)
    }
}

fn check_capacity(capacity: Option<i32>) -> Result<()> {
    match capacity {
        Some(c) if c < 0 => Err(SchoolAdminError::validation(
            "capacity must not be negative",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_capacity_rejected() {
        let mut req: CreateClassroomRequest =
            serde_json::from_str(r#"{"name": "Lab 1", "capacity": -3}"#).unwrap();
        assert!(req.normalize().is_err());
    }
}
