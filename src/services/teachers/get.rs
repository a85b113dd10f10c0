use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn get_teacher(
    service: &TeacherService,
    teacher_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(teacher, "Teacher retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => Ok(error_response("Get teacher", ErrorCode::TeacherOperationFailed, e)),
    }
}
