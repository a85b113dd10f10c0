use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FinanceService;
use crate::models::{ApiResponse, ErrorCode, finance::requests::FinancialLogListParams};
use crate::services::error_response;

pub async fn list_financial_logs(
    service: &FinanceService,
    query: FinancialLogListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_financial_logs_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Financial log list retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List financial logs", ErrorCode::FinanceOperationFailed, e)),
    }
}
