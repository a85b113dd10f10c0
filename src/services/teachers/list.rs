use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, teachers::requests::TeacherListParams};
use crate::services::error_response;

pub async fn list_teachers(
    service: &TeacherService,
    query: TeacherListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_teachers_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Teacher list retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List teachers", ErrorCode::TeacherOperationFailed, e)),
    }
}
