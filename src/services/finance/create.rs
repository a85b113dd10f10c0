use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FinanceService;
use crate::models::{ApiResponse, ErrorCode, finance::requests::CreateFinancialLogRequest};
use crate::services::error_response;

pub async fn create_financial_log(
    service: &FinanceService,
    mut financial_log_data: CreateFinancialLogRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = financial_log_data.normalize() {
        return Ok(error_response("Create financial log", ErrorCode::FinanceOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.create_financial_log(financial_log_data).await {
        Ok(financial_log) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(financial_log, "Financial log created successfully"))),
        Err(e) => Ok(error_response("Create financial log", ErrorCode::FinanceOperationFailed, e)),
    }
}
