use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode, classrooms::requests::CreateClassroomRequest};
use crate::services::error_response;

pub async fn create_classroom(
    service: &ClassroomService,
    mut classroom_data: CreateClassroomRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = classroom_data.normalize() {
        return Ok(error_response("Create classroom", ErrorCode::ClassroomOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.create_classroom(classroom_data).await {
        Ok(classroom) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(classroom, "Classroom created successfully"))),
        Err(e) => Ok(error_response("Create classroom", ErrorCode::ClassroomOperationFailed, e)),
    }
}
