use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn delete_teacher(
    service: &TeacherService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_teacher(teacher_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Teacher deleted successfully"))),
        Ok(false) => Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => Ok(error_response("Delete teacher", ErrorCode::TeacherOperationFailed, e)),
    }
}
