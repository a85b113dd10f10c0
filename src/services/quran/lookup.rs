use actix_web::{HttpResponse, Result as ActixResult};
use serde::Serialize;
use ts_rs::TS;

use super::QuranService;
use crate::errors::{Result, SchoolAdminError};
use crate::models::{
    ApiResponse, ErrorCode,
    quran::requests::{AyahQuery, LocateQuery},
};
use crate::services::error_response;

fn respond<T: Serialize + TS>(result: Result<T>, message: &str) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(ApiResponse::success(data, message)),
        Err(SchoolAdminError::Validation(msg)) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::QuranPositionInvalid, msg)),
        Err(e) => error_response("Quran lookup", ErrorCode::InternalServerError, e),
    }
}

pub async fn list_surahs(service: &QuranService) -> ActixResult<HttpResponse> {
    Ok(respond(Ok(service.index().surah_options()), "Surahs retrieved successfully"))
}

pub async fn list_hizbs(service: &QuranService) -> ActixResult<HttpResponse> {
    Ok(respond(service.index().hizb_options(), "Hizbs retrieved successfully"))
}

pub async fn hizbs_for_surah(service: &QuranService, surah: i32) -> ActixResult<HttpResponse> {
    Ok(respond(service.index().hizbs_for_surah(surah), "Hizbs retrieved successfully"))
}

pub async fn surahs_for_hizb(service: &QuranService, hizb: i32) -> ActixResult<HttpResponse> {
    Ok(respond(service.index().surahs_for_hizb(hizb), "Surahs retrieved successfully"))
}

pub async fn ayahs_for_surah(
    service: &QuranService,
    surah: i32,
    query: AyahQuery,
) -> ActixResult<HttpResponse> {
    Ok(respond(
        service.index().ayahs_for_surah(surah, query.hizb),
        "Ayahs retrieved successfully",
    ))
}

pub async fn locate(service: &QuranService, query: LocateQuery) -> ActixResult<HttpResponse> {
    Ok(respond(
        service.index().locate(query.surah, query.ayah),
        "Verse located successfully",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_surah_list_has_all_chapters() {
        let resp = list_surahs(&QuranService::new_lazy()).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 114);
        assert_eq!(json["data"][0]["verses_count"], 7);
    }

    #[actix_web::test]
    async fn test_out_of_range_surah_is_bad_request() {
        let resp = hizbs_for_surah(&QuranService::new_lazy(), 115).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["code"], ErrorCode::QuranPositionInvalid as i32);
    }

    #[actix_web::test]
    async fn test_locate_first_verse() {
        let query = LocateQuery { surah: 1, ayah: 1 };
        let resp = locate(&QuranService::new_lazy(), query).await.unwrap();
        let json = body_json(resp).await;
        assert_eq!(json["data"]["global_index"], 1);
        assert_eq!(json["data"]["hizb"], 1);
    }
}
