use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::{ApiResponse, ErrorCode, results::requests::CreateResultRequest};
use crate::services::error_response;

pub async fn create_result(
    service: &ResultService,
    result_data: CreateResultRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_result(result_data).await {
        Ok(result) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(result, "Result created successfully"))),
        Err(e) => Ok(error_response("Create result", ErrorCode::ResultOperationFailed, e)),
    }
}
