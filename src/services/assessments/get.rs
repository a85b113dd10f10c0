use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssessmentService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn get_assessment(
    service: &AssessmentService,
    assessment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assessment_by_id(assessment_id).await {
        Ok(Some(assessment)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(assessment, "Assessment retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::AssessmentNotFound, "Assessment not found")),
        Err(e) => Ok(error_response("Get assessment", ErrorCode::AssessmentOperationFailed, e)),
    }
}
