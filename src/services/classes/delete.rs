use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn delete_class(
    service: &ClassService,
    class_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_class(class_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Class deleted successfully"))),
        Ok(false) => Ok(not_found(ErrorCode::ClassNotFound, "Class not found")),
        Err(e) => Ok(error_response("Delete class", ErrorCode::ClassOperationFailed, e)),
    }
}
