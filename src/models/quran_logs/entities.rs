use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/quran_log.ts")]
pub enum QuranLogKind {
    Memorization, // 新背
    Revision,     // 复习
}

impl std::fmt::Display for QuranLogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuranLogKind::Memorization => write!(f, "memorization"),
            QuranLogKind::Revision => write!(f, "revision"),
        }
    }
}

impl std::str::FromStr for QuranLogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memorization" => Ok(QuranLogKind::Memorization),
            "revision" => Ok(QuranLogKind::Revision),
            _ => Err(format!("Invalid quran log kind: {s}")),
        }
    }
}

/// 学生一次背诵/复习的经文范围（闭区间）
///
/// `start_hizb`、`end_hizb` 与 `verses_count` 由经文索引推导，不落库。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quran_log.ts")]
pub struct QuranLog {
    pub id: i64,
    pub student_id: i64,
    pub teacher_id: Option<i64>,
    pub date: NaiveDate,
    pub kind: QuranLogKind,
    pub start_surah: i32,
    pub start_ayah: i32,
    pub end_surah: i32,
    pub end_ayah: i32,
    pub notes: Option<String>,
    pub start_hizb: Option<i32>,
    pub end_hizb: Option<i32>,
    pub verses_count: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
