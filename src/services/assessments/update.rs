use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssessmentService;
use crate::models::{ApiResponse, ErrorCode, assessments::requests::UpdateAssessmentRequest};
use crate::services::{error_response, not_found};

pub async fn update_assessment(
    service: &AssessmentService,
    assessment_id: i64,
    mut update_data: UpdateAssessmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.normalize() {
        return Ok(error_response("Update assessment", ErrorCode::AssessmentOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.update_assessment(assessment_id, update_data).await {
        Ok(Some(assessment)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(assessment, "Assessment updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::AssessmentNotFound, "Assessment not found")),
        Err(e) => Ok(error_response("Update assessment", ErrorCode::AssessmentOperationFailed, e)),
    }
}
