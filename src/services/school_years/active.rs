use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolYearService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn get_active_school_year(
    service: &SchoolYearService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_active_school_year().await {
        Ok(Some(year)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(year, "Active school year retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::NoActiveSchoolYear, "No active school year")),
        Err(e) => Ok(error_response(
            "Get active school year",
            ErrorCode::SchoolYearOperationFailed,
            e,
        )),
    }
}
