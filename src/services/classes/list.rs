use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, classes::requests::ClassListParams};
use crate::services::error_response;

pub async fn list_classes(
    service: &ClassService,
    query: ClassListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classes_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Class list retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List classes", ErrorCode::ClassOperationFailed, e)),
    }
}
