use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssessmentService;
use crate::models::{ApiResponse, ErrorCode, assessments::requests::AssessmentListParams};
use crate::services::error_response;

pub async fn list_assessments(
    service: &AssessmentService,
    query: AssessmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_assessments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Assessment list retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List assessments", ErrorCode::AssessmentOperationFailed, e)),
    }
}
