use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode, classrooms::requests::ClassroomListParams};
use crate::services::error_response;

pub async fn list_classrooms(
    service: &ClassroomService,
    query: ClassroomListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classrooms_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Classroom list retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List classrooms", ErrorCode::ClassroomOperationFailed, e)),
    }
}
