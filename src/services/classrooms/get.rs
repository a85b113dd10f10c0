use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn get_classroom(
    service: &ClassroomService,
    classroom_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_classroom_by_id(classroom_id).await {
        Ok(Some(classroom)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(classroom, "Classroom retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::ClassroomNotFound, "Classroom not found")),
        Err(e) => Ok(error_response("Get classroom", ErrorCode::ClassroomOperationFailed, e)),
    }
}
