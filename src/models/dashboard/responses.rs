use serde::Serialize;
use ts_rs::TS;

use crate::models::finance::responses::FinanceSummary;
use crate::models::school_years::entities::SchoolYear;

/// 各类记录的数量
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct EntityCounts {
    pub students: u64,
    pub teachers: u64,
    pub classes: u64,
    pub classrooms: u64,
    pub subjects: u64,
    pub rosters: u64,
    pub assessments: u64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardSummary {
    pub counts: EntityCounts,
    pub active_school_year: Option<SchoolYear>,
    pub finance: FinanceSummary,
    pub uptime_seconds: i64,
}
