use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FinanceService;
use crate::errors::SchoolAdminError;
use crate::models::{ApiResponse, ErrorCode, finance::requests::FinanceSummaryParams};
use crate::services::error_response;

pub async fn get_summary(
    service: &FinanceService,
    params: FinanceSummaryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let (Some(from), Some(to)) = (params.from, params.to)
        && from > to
    {
        return Ok(error_response(
            "Finance summary",
            ErrorCode::FinanceOperationFailed,
            SchoolAdminError::validation("from must not be after to"),
        ));
    }

    let storage = service.get_storage(request);

    match storage.finance_summary(params).await {
        Ok(summary) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(summary, "Finance summary retrieved successfully"))),
        Err(e) => Ok(error_response("Finance summary", ErrorCode::FinanceOperationFailed, e)),
    }
}
