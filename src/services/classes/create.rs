use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, classes::requests::CreateClassRequest};
use crate::services::error_response;

pub async fn create_class(
    service: &ClassService,
    mut class_data: CreateClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = class_data.normalize() {
        return Ok(error_response("Create class", ErrorCode::ClassOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.create_class(class_data).await {
        Ok(class) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(class, "Class created successfully"))),
        Err(e) => Ok(error_response("Create class", ErrorCode::ClassOperationFailed, e)),
    }
}
