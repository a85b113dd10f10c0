//! 古兰经索引查询，数据全部来自内置静态表

pub mod lookup;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::quran::requests::{AyahQuery, LocateQuery};
use crate::quran::QuranIndex;

pub struct QuranService;

impl QuranService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn index(&self) -> &'static QuranIndex {
        QuranIndex::global()
    }

    pub async fn list_surahs(&self) -> ActixResult<HttpResponse> {
        lookup::list_surahs(self).await
    }

    pub async fn list_hizbs(&self) -> ActixResult<HttpResponse> {
        lookup::list_hizbs(self).await
    }

    pub async fn hizbs_for_surah(&self, surah: i32) -> ActixResult<HttpResponse> {
        lookup::hizbs_for_surah(self, surah).await
    }

    pub async fn surahs_for_hizb(&self, hizb: i32) -> ActixResult<HttpResponse> {
        lookup::surahs_for_hizb(self, hizb).await
    }

    pub async fn ayahs_for_surah(&self, surah: i32, query: AyahQuery) -> ActixResult<HttpResponse> {
        lookup::ayahs_for_surah(self, surah, query).await
    }

    pub async fn locate(&self, query: LocateQuery) -> ActixResult<HttpResponse> {
        lookup::locate(self, query).await
    }
}
