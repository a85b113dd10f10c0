use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuranLogService;
use crate::models::{ApiResponse, ErrorCode, quran_logs::requests::QuranLogListParams};
use crate::services::error_response;

pub async fn list_quran_logs(
    service: &QuranLogService,
    query: QuranLogListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_quran_logs_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Qur'an log list retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List quran logs", ErrorCode::QuranLogOperationFailed, e)),
    }
}
