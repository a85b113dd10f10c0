//! 章 / 节 / hizb 三套坐标的互相换算
//!
//! 所有经文按章序编号为一个全局索引（从 1 开始），章的累计经文数与
//! 60 个 hizb 的起始位置都换算到这个索引上，之后的查询都是区间运算。
//! 数据编译进二进制，首次使用时建立索引。

mod data;

use once_cell::sync::Lazy;

use crate::errors::{Result, SchoolAdminError};
use crate::models::quran::entities::{HizbOption, SurahOption, VerseKey, VerseLocation};

pub const SURAH_COUNT: i32 = 114;
pub const HIZB_COUNT: i32 = 60;

static INDEX: Lazy<QuranIndex> = Lazy::new(QuranIndex::build);

pub struct QuranIndex {
    /// `cumulative[k]` 为前 k 章的经文总数，长度 115
    cumulative: Vec<i32>,
    /// 每个 hizb 起始经文的全局索引，严格递增
    hizb_starts: Vec<i32>,
}

impl QuranIndex {
    pub fn global() -> &'static QuranIndex {
        &INDEX
    }

    fn build() -> Self {
        let mut cumulative = Vec::with_capacity(data::SURAHS.len() + 1);
        cumulative.push(0);
        for (_, verses) in data::SURAHS.iter() {
            let last = cumulative.last().copied().unwrap_or(0);
            cumulative.push(last + verses);
        }

        let hizb_starts = data::HIZB_STARTS
            .iter()
            .map(|&(surah, ayah)| cumulative[(surah - 1) as usize] + ayah)
            .collect();

        Self {
            cumulative,
            hizb_starts,
        }
    }

    pub fn total_verses(&self) -> i32 {
        self.cumulative[SURAH_COUNT as usize]
    }

    fn check_surah(surah: i32) -> Result<()> {
        if !(1..=SURAH_COUNT).contains(&surah) {
            return Err(SchoolAdminError::validation(format!(
                "Invalid surah {surah}, expected 1-{SURAH_COUNT}"
            )));
        }
        Ok(())
    }

    fn check_hizb(hizb: i32) -> Result<()> {
        if !(1..=HIZB_COUNT).contains(&hizb) {
            return Err(SchoolAdminError::validation(format!(
                "Invalid hizb {hizb}, expected 1-{HIZB_COUNT}"
            )));
        }
        Ok(())
    }

    /// 某章的经文数
    pub fn verses_in(&self, surah: i32) -> Result<i32> {
        Self::check_surah(surah)?;
        Ok(data::SURAHS[(surah - 1) as usize].1)
    }

    /// 章内全局索引区间 `[first, last]`
    fn surah_range(&self, surah: i32) -> Result<(i32, i32)> {
        Self::check_surah(surah)?;
        let idx = surah as usize;
        Ok((self.cumulative[idx - 1] + 1, self.cumulative[idx]))
    }

    /// (surah, ayah) -> 全局索引
    pub fn to_global(&self, surah: i32, ayah: i32) -> Result<i32> {
        let verses = self.verses_in(surah)?;
        if !(1..=verses).contains(&ayah) {
            return Err(SchoolAdminError::validation(format!(
                "Invalid ayah {ayah} for surah {surah}, expected 1-{verses}"
            )));
        }
        Ok(self.cumulative[(surah - 1) as usize] + ayah)
    }

    /// 全局索引 -> (surah, ayah)
    pub fn from_global(&self, index: i32) -> Result<VerseKey> {
        if !(1..=self.total_verses()).contains(&index) {
            return Err(SchoolAdminError::validation(format!(
                "Invalid verse index {index}, expected 1-{}",
                self.total_verses()
            )));
        }
        // 第一个累计值 >= index 的位置即所在章
        let surah = self.cumulative.partition_point(|&c| c < index) as i32;
        Ok(VerseKey {
            surah,
            ayah: index - self.cumulative[(surah - 1) as usize],
        })
    }

    /// hizb 对应的全局索引区间 `[start, end]`
    pub fn hizb_range(&self, hizb: i32) -> Result<(i32, i32)> {
        Self::check_hizb(hizb)?;
        let idx = (hizb - 1) as usize;
        let start = self.hizb_starts[idx];
        let end = self
            .hizb_starts
            .get(idx + 1)
            .map(|next| next - 1)
            .unwrap_or_else(|| self.total_verses());
        Ok((start, end))
    }

    /// 包含给定经文的 hizb：起点不超过目标的最后一个
    pub fn hizb_of(&self, surah: i32, ayah: i32) -> Result<i32> {
        let target = self.to_global(surah, ayah)?;
        let mut found = 1;
        for (idx, start) in self.hizb_starts.iter().enumerate() {
            if *start <= target {
                found = idx as i32 + 1;
            } else {
                break;
            }
        }
        Ok(found)
    }

    fn surah_option(&self, surah: i32) -> SurahOption {
        let (name, verses) = data::SURAHS[(surah - 1) as usize];
        SurahOption {
            id: surah,
            name: name.to_string(),
            verses_count: verses,
        }
    }

    fn hizb_option(&self, hizb: i32) -> Result<HizbOption> {
        let (start, end) = self.hizb_range(hizb)?;
        Ok(HizbOption {
            id: hizb,
            start: self.from_global(start)?,
            end: self.from_global(end)?,
        })
    }

    /// 全部章
    pub fn surah_options(&self) -> Vec<SurahOption> {
        (1..=SURAH_COUNT).map(|s| self.surah_option(s)).collect()
    }

    /// 全部 hizb
    pub fn hizb_options(&self) -> Result<Vec<HizbOption>> {
        (1..=HIZB_COUNT).map(|h| self.hizb_option(h)).collect()
    }

    /// 与某章有交集的 hizb
    pub fn hizbs_for_surah(&self, surah: i32) -> Result<Vec<HizbOption>> {
        let (first, last) = self.surah_range(surah)?;
        let mut options = Vec::new();
        for hizb in 1..=HIZB_COUNT {
            let (start, end) = self.hizb_range(hizb)?;
            if start <= last && end >= first {
                options.push(self.hizb_option(hizb)?);
            }
        }
        Ok(options)
    }

    /// 与某 hizb 有交集的章
    pub fn surahs_for_hizb(&self, hizb: i32) -> Result<Vec<SurahOption>> {
        let (start, end) = self.hizb_range(hizb)?;
        let first = self.from_global(start)?.surah;
        let last = self.from_global(end)?.surah;
        Ok((first..=last).map(|s| self.surah_option(s)).collect())
    }

    /// 某章可选的节号，可限定在某个 hizb 内
    ///
    /// hizb 与该章没有交集时返回空列表。
    pub fn ayahs_for_surah(&self, surah: i32, hizb: Option<i32>) -> Result<Vec<i32>> {
        let (first, last) = self.surah_range(surah)?;
        let (lo, hi) = match hizb {
            Some(h) => {
                let (start, end) = self.hizb_range(h)?;
                (first.max(start), last.min(end))
            }
            None => (first, last),
        };
        let offset = first - 1;
        Ok((lo..=hi).map(|idx| idx - offset).collect())
    }

    /// 经文的完整定位信息
    pub fn locate(&self, surah: i32, ayah: i32) -> Result<VerseLocation> {
        let global_index = self.to_global(surah, ayah)?;
        Ok(VerseLocation {
            surah,
            ayah,
            surah_name: data::SURAHS[(surah - 1) as usize].0.to_string(),
            global_index,
            hizb: self.hizb_of(surah, ayah)?,
        })
    }

    /// 区间内的经文数（含两端），要求起点不晚于终点
    pub fn verses_between(&self, start: VerseKey, end: VerseKey) -> Result<i32> {
        let from = self.to_global(start.surah, start.ayah)?;
        let to = self.to_global(end.surah, end.ayah)?;
        if from > to {
            return Err(SchoolAdminError::validation(format!(
                "Range start {}:{} is after end {}:{}",
                start.surah, start.ayah, end.surah, end.ayah
            )));
        }
        Ok(to - from + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> &'static QuranIndex {
        QuranIndex::global()
    }

    fn ids_h(options: Vec<HizbOption>) -> Vec<i32> {
        options.into_iter().map(|o| o.id).collect()
    }

    fn ids_s(options: Vec<SurahOption>) -> Vec<i32> {
        options.into_iter().map(|o| o.id).collect()
    }

    #[test]
    fn test_tables() {
        assert_eq!(index().total_verses(), 6236);
        assert_eq!(index().surah_options().len(), 114);
        assert_eq!(index().hizb_options().unwrap().len(), 60);
    }

    #[test]
    fn test_cumulative_strictly_increasing() {
        let cumulative = &index().cumulative;
        assert_eq!(cumulative.len(), 115);
        assert!(cumulative.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_first_ayah_follows_previous_surahs() {
        for surah in 1..=SURAH_COUNT {
            assert_eq!(
                index().to_global(surah, 1).unwrap(),
                index().cumulative[(surah - 1) as usize] + 1
            );
        }
    }

    #[test]
    fn test_global_round_trip() {
        for idx in [1, 7, 8, 293, 294, 6230, 6236] {
            let key = index().from_global(idx).unwrap();
            assert_eq!(index().to_global(key.surah, key.ayah).unwrap(), idx);
        }
        assert_eq!(
            index().from_global(8).unwrap(),
            VerseKey { surah: 2, ayah: 1 }
        );
    }

    #[test]
    fn test_hizb_ranges_are_ordered_and_cover_everything() {
        let mut previous_end = 0;
        for hizb in 1..=HIZB_COUNT {
            let (start, end) = index().hizb_range(hizb).unwrap();
            assert!(start <= end);
            assert_eq!(start, previous_end + 1);
            previous_end = end;
        }
        assert_eq!(previous_end, index().total_verses());
        assert_eq!(index().hizb_range(1).unwrap(), (1, 81));
    }

    #[test]
    fn test_hizb_of() {
        assert_eq!(index().hizb_of(1, 1).unwrap(), 1);
        assert_eq!(index().hizb_of(2, 74).unwrap(), 1);
        assert_eq!(index().hizb_of(2, 75).unwrap(), 2);
        assert_eq!(index().hizb_of(18, 74).unwrap(), 30);
        assert_eq!(index().hizb_of(18, 75).unwrap(), 31);
        assert_eq!(index().hizb_of(114, 6).unwrap(), 60);
    }

    #[test]
    fn test_surah_hizb_intersections() {
        assert_eq!(ids_h(index().hizbs_for_surah(2).unwrap()), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids_h(index().hizbs_for_surah(114).unwrap()), vec![60]);
        assert_eq!(ids_s(index().surahs_for_hizb(5).unwrap()), vec![2, 3]);
        assert_eq!(
            ids_s(index().surahs_for_hizb(60).unwrap()),
            (87..=114).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_intersection_is_symmetric() {
        for surah in 1..=SURAH_COUNT {
            for hizb in ids_h(index().hizbs_for_surah(surah).unwrap()) {
                assert!(ids_s(index().surahs_for_hizb(hizb).unwrap()).contains(&surah));
            }
        }
        for hizb in 1..=HIZB_COUNT {
            for surah in ids_s(index().surahs_for_hizb(hizb).unwrap()) {
                assert!(ids_h(index().hizbs_for_surah(surah).unwrap()).contains(&hizb));
            }
        }
    }

    #[test]
    fn test_ayahs_constrained_by_hizb() {
        assert_eq!(index().ayahs_for_surah(1, None).unwrap(), (1..=7).collect::<Vec<_>>());
        assert_eq!(
            index().ayahs_for_surah(3, Some(5)).unwrap(),
            (1..=14).collect::<Vec<_>>()
        );
        assert_eq!(
            index().ayahs_for_surah(2, Some(5)).unwrap(),
            (253..=286).collect::<Vec<_>>()
        );
        assert!(index().ayahs_for_surah(2, Some(40)).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_positions() {
        assert!(index().to_global(0, 1).is_err());
        assert!(index().to_global(115, 1).is_err());
        assert!(index().to_global(1, 8).is_err());
        assert!(index().hizb_range(61).is_err());
        assert!(index().from_global(6237).is_err());
    }

    #[test]
    fn test_verses_between() {
        let a = VerseKey { surah: 1, ayah: 1 };
        let b = VerseKey { surah: 2, ayah: 5 };
        assert_eq!(index().verses_between(a, b).unwrap(), 12);
        assert!(index().verses_between(b, a).is_err());
    }

    #[test]
    fn test_locate() {
        let location = index().locate(18, 75).unwrap();
        assert_eq!(location.hizb, 31);
        assert_eq!(location.surah_name, "Al-Kahf");
    }
}
