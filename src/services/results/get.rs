use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn get_result(
    service: &ResultService,
    result_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_result_by_id(result_id).await {
        Ok(Some(result)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(result, "Result retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::ResultNotFound, "Result not found")),
        Err(e) => Ok(error_response("Get result", ErrorCode::ResultOperationFailed, e)),
    }
}
