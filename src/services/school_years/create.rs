use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SchoolYearService;
use crate::models::{ApiResponse, ErrorCode, school_years::requests::CreateSchoolYearRequest};
use crate::services::error_response;

pub async fn create_school_year(
    service: &SchoolYearService,
    mut school_year_data: CreateSchoolYearRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = school_year_data.normalize() {
        return Ok(error_response("Create school year", ErrorCode::SchoolYearOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.create_school_year(school_year_data).await {
        Ok(school_year) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(school_year, "School year created successfully"))),
        Err(e) => Ok(error_response("Create school year", ErrorCode::SchoolYearOperationFailed, e)),
    }
}
