use serde::Deserialize;
use ts_rs::TS;

// 某章节列表查询，可按 hizb 截取
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quran.ts")]
pub struct AyahQuery {
    pub hizb: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quran.ts")]
pub struct LocateQuery {
    pub surah: i32,
    pub ayah: i32,
}
