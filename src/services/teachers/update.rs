use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, teachers::requests::UpdateTeacherRequest};
use crate::services::{error_response, not_found};

pub async fn update_teacher(
    service: &TeacherService,
    teacher_id: i64,
    update_data: UpdateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.validate() {
        return Ok(error_response("Update teacher", ErrorCode::TeacherOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.update_teacher(teacher_id, update_data).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(teacher, "Teacher updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => Ok(error_response("Update teacher", ErrorCode::TeacherOperationFailed, e)),
    }
}
