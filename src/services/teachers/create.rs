use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, teachers::requests::CreateTeacherRequest};
use crate::services::error_response;

pub async fn create_teacher(
    service: &TeacherService,
    teacher_data: CreateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = teacher_data.validate() {
        return Ok(error_response("Create teacher", ErrorCode::TeacherOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.create_teacher(teacher_data).await {
        Ok(teacher) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(teacher, "Teacher created successfully"))),
        Err(e) => Ok(error_response("Create teacher", ErrorCode::TeacherOperationFailed, e)),
    }
}
