use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolYearService;
use crate::models::{ApiResponse, ErrorCode, school_years::requests::SchoolYearListParams};
use crate::services::error_response;

pub async fn list_school_years(
    service: &SchoolYearService,
    query: SchoolYearListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_school_years_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "School year list retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List school years", ErrorCode::SchoolYearOperationFailed, e)),
    }
}
