use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, classes::requests::UpdateClassRequest};
use crate::services::{error_response, not_found};

pub async fn update_class(
    service: &ClassService,
    class_id: i64,
    mut update_data: UpdateClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.normalize() {
        return Ok(error_response("Update class", ErrorCode::ClassOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(class, "Class updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::ClassNotFound, "Class not found")),
        Err(e) => Ok(error_response("Update class", ErrorCode::ClassOperationFailed, e)),
    }
}
