use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssessmentService;
use crate::models::{ApiResponse, ErrorCode, assessments::requests::CreateAssessmentRequest};
use crate::services::error_response;

pub async fn create_assessment(
    service: &AssessmentService,
    mut assessment_data: CreateAssessmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = assessment_data.normalize() {
        return Ok(error_response("Create assessment", ErrorCode::AssessmentOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.create_assessment(assessment_data).await {
        Ok(assessment) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(assessment, "Assessment created successfully"))),
        Err(e) => Ok(error_response("Create assessment", ErrorCode::AssessmentOperationFailed, e)),
    }
}
