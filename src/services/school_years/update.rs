use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolYearService;
use crate::models::{ApiResponse, ErrorCode, school_years::requests::UpdateSchoolYearRequest};
use crate::services::{error_response, not_found};

pub async fn update_school_year(
    service: &SchoolYearService,
    school_year_id: i64,
    mut update_data: UpdateSchoolYearRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.normalize() {
        return Ok(error_response("Update school year", ErrorCode::SchoolYearOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.update_school_year(school_year_id, update_data).await {
        Ok(Some(school_year)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(school_year, "School year updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::SchoolYearNotFound, "School year not found")),
        Err(e) => Ok(error_response("Update school year", ErrorCode::SchoolYearOperationFailed, e)),
    }
}
