use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::UpdateStudentRequest};
use crate::services::{error_response, not_found};

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.validate() {
        return Ok(error_response("Update student", ErrorCode::StudentOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(student, "Student updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Ok(error_response("Update student", ErrorCode::StudentOperationFailed, e)),
    }
}
