use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AbsenceService;
use crate::models::{ApiResponse, ErrorCode, absences::requests::AbsenceListParams};
use crate::services::error_response;

pub async fn list_absences(
    service: &AbsenceService,
    query: AbsenceListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_absences_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Absence list retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List absences", ErrorCode::AbsenceOperationFailed, e)),
    }
}
