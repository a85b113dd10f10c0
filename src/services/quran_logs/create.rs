use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuranLogService;
use crate::models::{ApiResponse, ErrorCode, quran_logs::requests::CreateQuranLogRequest};
use crate::services::error_response;

pub async fn create_quran_log(
    service: &QuranLogService,
    quran_log_data: CreateQuranLogRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_quran_log(quran_log_data).await {
        Ok(quran_log) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(quran_log, "Qur'an log created successfully"))),
        Err(e) => Ok(error_response("Create qur'an log", ErrorCode::QuranLogOperationFailed, e)),
    }
}
