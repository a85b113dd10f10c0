use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::define_safe_i64_extractor;
use crate::middlewares;
use crate::models::quran::requests::{AyahQuery, LocateQuery};
use crate::services::QuranService;

static QURAN_SERVICE: Lazy<QuranService> = Lazy::new(QuranService::new_lazy);

define_safe_i64_extractor!(SafeSurahId, "surah");
define_safe_i64_extractor!(SafeHizbId, "hizb");

// 超出 i32 的编号交给索引按越界处理
fn position(raw: i64) -> i32 {
    i32::try_from(raw).unwrap_or(i32::MAX)
}

pub async fn list_surahs() -> ActixResult<HttpResponse> {
    QURAN_SERVICE.list_surahs().await
}

pub async fn list_hizbs() -> ActixResult<HttpResponse> {
    QURAN_SERVICE.list_hizbs().await
}

pub async fn hizbs_for_surah(surah: SafeSurahId) -> ActixResult<HttpResponse> {
    QURAN_SERVICE.hizbs_for_surah(position(surah.0)).await
}

pub async fn surahs_for_hizb(hizb: SafeHizbId) -> ActixResult<HttpResponse> {
    QURAN_SERVICE.surahs_for_hizb(position(hizb.0)).await
}

pub async fn ayahs_for_surah(
    surah: SafeSurahId,
    query: web::Query<AyahQuery>,
) -> ActixResult<HttpResponse> {
    QURAN_SERVICE
        .ayahs_for_surah(position(surah.0), query.into_inner())
        .await
}

pub async fn locate(query: web::Query<LocateQuery>) -> ActixResult<HttpResponse> {
    QURAN_SERVICE.locate(query.into_inner()).await
}

pub fn configure_quran_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/quran")
            .wrap(middlewares::RequireJWT)
            .route("/surahs", web::get().to(list_surahs))
            .route("/hizbs", web::get().to(list_hizbs))
            .route("/surahs/{surah}/hizbs", web::get().to(hizbs_for_surah))
            .route("/surahs/{surah}/ayahs", web::get().to(ayahs_for_surah))
            .route("/hizbs/{hizb}/surahs", web::get().to(surahs_for_hizb))
            .route("/locate", web::get().to(locate)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_saturates() {
        assert_eq!(position(2), 2);
        assert_eq!(position(i64::MAX), i32::MAX);
    }
}
