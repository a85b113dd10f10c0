use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolYearService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn get_school_year(
    service: &SchoolYearService,
    school_year_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_school_year_by_id(school_year_id).await {
        Ok(Some(school_year)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(school_year, "School year retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::SchoolYearNotFound, "School year not found")),
        Err(e) => Ok(error_response("Get school year", ErrorCode::SchoolYearOperationFailed, e)),
    }
}
