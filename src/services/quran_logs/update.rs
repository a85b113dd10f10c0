use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuranLogService;
use crate::models::{ApiResponse, ErrorCode, quran_logs::requests::UpdateQuranLogRequest};
use crate::services::{error_response, not_found};

pub async fn update_quran_log(
    service: &QuranLogService,
    quran_log_id: i64,
    update_data: UpdateQuranLogRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_quran_log(quran_log_id, update_data).await {
        Ok(Some(quran_log)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(quran_log, "Qur'an log updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::QuranLogNotFound, "Qur'an log not found")),
        Err(e) => Ok(error_response("Update qur'an log", ErrorCode::QuranLogOperationFailed, e)),
    }
}
