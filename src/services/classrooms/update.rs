use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode, classrooms::requests::UpdateClassroomRequest};
use crate::services::{error_response, not_found};

pub async fn update_classroom(
    service: &ClassroomService,
    classroom_id: i64,
    mut update_data: UpdateClassroomRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.normalize() {
        return Ok(error_response("Update classroom", ErrorCode::ClassroomOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.update_classroom(classroom_id, update_data).await {
        Ok(Some(classroom)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(classroom, "Classroom updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::ClassroomNotFound, "Classroom not found")),
        Err(e) => Ok(error_response("Update classroom", ErrorCode::ClassroomOperationFailed, e)),
    }
}
