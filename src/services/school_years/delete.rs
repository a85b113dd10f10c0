use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolYearService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn delete_school_year(
    service: &SchoolYearService,
    school_year_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_school_year(school_year_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("School year deleted successfully"))),
        Ok(false) => Ok(not_found(ErrorCode::SchoolYearNotFound, "School year not found")),
        Err(e) => Ok(error_response("Delete school year", ErrorCode::SchoolYearOperationFailed, e)),
    }
}
