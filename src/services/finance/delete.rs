use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FinanceService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn delete_financial_log(
    service: &FinanceService,
    financial_log_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_financial_log(financial_log_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Financial log deleted successfully"))),
        Ok(false) => Ok(not_found(ErrorCode::FinancialLogNotFound, "Financial log not found")),
        Err(e) => Ok(error_response("Delete financial log", ErrorCode::FinanceOperationFailed, e)),
    }
}
