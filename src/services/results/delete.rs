use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn delete_result(
    service: &ResultService,
    result_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_result(result_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Result deleted successfully"))),
        Ok(false) => Ok(not_found(ErrorCode::ResultNotFound, "Result not found")),
        Err(e) => Ok(error_response("Delete result", ErrorCode::ResultOperationFailed, e)),
    }
}
