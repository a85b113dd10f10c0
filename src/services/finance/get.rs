use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FinanceService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn get_financial_log(
    service: &FinanceService,
    financial_log_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_financial_log_by_id(financial_log_id).await {
        Ok(Some(financial_log)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(financial_log, "Financial log retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::FinancialLogNotFound, "Financial log not found")),
        Err(e) => Ok(error_response("Get financial log", ErrorCode::FinanceOperationFailed, e)),
    }
}
