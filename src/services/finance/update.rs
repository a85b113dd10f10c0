use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FinanceService;
use crate::models::{ApiResponse, ErrorCode, finance::requests::UpdateFinancialLogRequest};
use crate::services::{error_response, not_found};

pub async fn update_financial_log(
    service: &FinanceService,
    financial_log_id: i64,
    mut update_data: UpdateFinancialLogRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.normalize() {
        return Ok(error_response("Update financial log", ErrorCode::FinanceOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.update_financial_log(financial_log_id, update_data).await {
        Ok(Some(financial_log)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(financial_log, "Financial log updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::FinancialLogNotFound, "Financial log not found")),
        Err(e) => Ok(error_response("Update financial log", ErrorCode::FinanceOperationFailed, e)),
    }
}
