use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

use super::entities::QuranLogKind;
use crate::errors::Result;
use crate::models::common::PaginationQuery;
use crate::models::common::serde_helpers::{
    deserialize_nullable_i64, deserialize_optional_i64, deserialize_string_to_i64,
};
use crate::models::quran::entities::VerseKey;
use crate::quran::QuranIndex;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quran_log.ts")]
pub struct QuranLogListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub student_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub teacher_id: Option<i64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quran_log.ts")]
pub struct CreateQuranLogRequest {
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    pub student_id: i64,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub teacher_id: Option<i64>,
    pub date: NaiveDate,
    pub kind: QuranLogKind,
    pub start_surah: i32,
    pub start_ayah: i32,
    pub end_surah: i32,
    pub end_ayah: i32,
    pub notes: Option<String>,
}

impl CreateQuranLogRequest {
    pub fn validate(&self) -> Result<()> {
        check_verse_range(
            VerseKey {
                surah: self.start_surah,
                ayah: self.start_ayah,
            },
            VerseKey {
                surah: self.end_surah,
                ayah: self.end_ayah,
            },
        )
    }
}

/// 部分更新；范围合并现有记录后在存储层校验
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quran_log.ts")]
pub struct UpdateQuranLogRequest {
    #[serde(default, deserialize_with = "deserialize_nullable_i64")]
    pub teacher_id: Option<Option<i64>>,
    pub date: Option<NaiveDate>,
    pub kind: Option<QuranLogKind>,
    pub start_surah: Option<i32>,
    pub start_ayah: Option<i32>,
    pub end_surah: Option<i32>,
    pub end_ayah: Option<i32>,
    pub notes: Option<String>,
}

/// 起止都必须是有效经文，且起点不晚于终点
pub fn check_verse_range(start: VerseKey, end: VerseKey) -> Result<()> {
    QuranIndex::global().verses_between(start, end).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: (i32, i32), end: (i32, i32)) -> CreateQuranLogRequest {
        CreateQuranLogRequest {
            student_id: 1,
            teacher_id: None,
            date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
            kind: QuranLogKind::Memorization,
            start_surah: start.0,
            start_ayah: start.1,
            end_surah: end.0,
            end_ayah: end.1,
            notes: None,
        }
    }

    #[test]
    fn test_valid_range() {
        assert!(request((1, 1), (2, 5)).validate().is_ok());
        assert!(request((114, 6), (114, 6)).validate().is_ok());
    }

    #[test]
    fn test_invalid_positions_and_order() {
        assert!(request((1, 8), (2, 1)).validate().is_err());
        assert!(request((2, 10), (2, 5)).validate().is_err());
        assert!(request((0, 1), (1, 1)).validate().is_err());
    }
}
