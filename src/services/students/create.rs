use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::CreateStudentRequest};
use crate::services::error_response;

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = student_data.validate() {
        return Ok(error_response("Create student", ErrorCode::StudentOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.create_student(student_data).await {
        Ok(student) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(student, "Student created successfully"))),
        Err(e) => Ok(error_response("Create student", ErrorCode::StudentOperationFailed, e)),
    }
}
