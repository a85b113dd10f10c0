use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::EnrollmentRequest};
use crate::services::{error_response, not_found};

pub async fn set_enrollment(
    service: &StudentService,
    student_id: i64,
    enrollment: EnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let message = if enrollment.class_id.is_some() {
        "Student enrolled successfully"
    } else {
        "Student unenrolled successfully"
    };

    match storage.set_student_enrollment(student_id, enrollment.class_id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(student, message))),
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Ok(error_response("Update enrollment", ErrorCode::StudentOperationFailed, e)),
    }
}
