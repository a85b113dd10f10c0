use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 经文坐标（章, 节）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quran.ts")]
pub struct VerseKey {
    pub surah: i32,
    pub ayah: i32,
}

// 章选项
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quran.ts")]
pub struct SurahOption {
    pub id: i32,
    pub name: String,
    pub verses_count: i32,
}

// Hizb 选项，start/end 为闭区间
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quran.ts")]
pub struct HizbOption {
    pub id: i32,
    pub start: VerseKey,
    pub end: VerseKey,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quran.ts")]
pub struct VerseLocation {
    pub surah: i32,
    pub ayah: i32,
    pub surah_name: String,
    /// 全书顺序编号，从 1 开始
    pub global_index: i32,
    pub hizb: i32,
}
