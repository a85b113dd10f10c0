use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::{ApiResponse, ErrorCode, results::requests::UpdateResultRequest};
use crate::services::{error_response, not_found};

pub async fn update_result(
    service: &ResultService,
    result_id: i64,
    update_data: UpdateResultRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_result(result_id, update_data).await {
        Ok(Some(result)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(result, "Result updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::ResultNotFound, "Result not found")),
        Err(e) => Ok(error_response("Update result", ErrorCode::ResultOperationFailed, e)),
    }
}
