use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::{ApiResponse, ErrorCode, results::requests::ResultListParams};
use crate::services::error_response;

pub async fn list_results(
    service: &ResultService,
    query: ResultListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_results_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Result list retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List results", ErrorCode::ResultOperationFailed, e)),
    }
}
