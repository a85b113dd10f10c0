use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{Result, SchoolAdminError};
use crate::models::common::PaginationQuery;
use crate::models::common::serde_helpers::{deserialize_optional_i64, deserialize_string_to_i64};
use crate::utils::validate::{normalize_name, require_non_blank};

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct AssessmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub class_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub subject_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct CreateAssessmentRequest {
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub class_id: i64,
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub subject_id: i64,
    pub name: String,
    pub kind: String,
    pub date: NaiveDate,
    pub max_score: f64,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl CreateAssessmentRequest {
    pub fn normalize(&mut self) -> Result<()> {
        self.name = normalize_name("name", &self.name)?;
        require_non_blank("kind", &self.kind)?;
        check_scores(Some(self.max_score), Some(self.weight))
    }
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct UpdateAssessmentRequest {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub class_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub subject_id: Option<i64>,
    pub name: Option<String>,
    pub kind: Option<String>,
    pub date: Option<NaiveDate>,
    pub max_score: Option<f64>,
    pub weight: Option<f64>,
}

impl UpdateAssessmentRequest {
    pub fn normalize(&mut self) -> Result<()> {
        if let Some(name) = &self.name {
            self.name = Some(normalize_name("name", name)?);
        }
        if let Some(kind) = &self.kind {
            require_non_blank("kind", kind)?;
        }
        check_scores(self.max_score, self.weight)
    }
}

fn check_scores(max_score: Option<f64>, weight: Option<f64>) -> Result<()> {
    if let Some(max) = max_score
        && !(max.is_finite() && max > 0.0)
    {
        return Err(SchoolAdminError::validation("max_score must be positive"));
    }
    if let Some(weight) = weight
        && !(weight.is_finite() && weight >= 0.0)
    {
        return Err(SchoolAdminError::validation("weight must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_defaults_to_one() {
        let mut req: CreateAssessmentRequest = serde_json::from_str(
            r#"{"class_id": 1, "subject_id": "2", "name": "Midterm", "kind": "exam",
                "date": "2024-10-01", "max_score": 100}"#,
        )
        .unwrap();
        req.normalize().unwrap();
        assert_eq!(req.weight, 1.0);
    }

    #[test]
    fn test_zero_max_score_rejected() {
        let mut req = UpdateAssessmentRequest {
            max_score: Some(0.0),
            ..Default::default()
        };
        assert!(req.normalize().is_err());
    }
}
