use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuranLogService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn get_quran_log(
    service: &QuranLogService,
    quran_log_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_quran_log_by_id(quran_log_id).await {
        Ok(Some(quran_log)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(quran_log, "Qur'an log retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::QuranLogNotFound, "Qur'an log not found")),
        Err(e) => Ok(error_response("Get qur'an log", ErrorCode::QuranLogOperationFailed, e)),
    }
}
