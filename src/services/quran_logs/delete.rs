use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuranLogService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn delete_quran_log(
    service: &QuranLogService,
    quran_log_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_quran_log(quran_log_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Qur'an log deleted successfully"))),
        Ok(false) => Ok(not_found(ErrorCode::QuranLogNotFound, "Qur'an log not found")),
        Err(e) => Ok(error_response("Delete qur'an log", ErrorCode::QuranLogOperationFailed, e)),
    }
}
