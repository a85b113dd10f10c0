use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use crate::models::{
    ApiResponse, ErrorCode,
    results::{
        requests::BulkResultRequest,
        responses::{BulkResultResponse, BulkSaveOutcome},
    },
};
use crate::services::error_response;

pub async fn save_bulk(
    service: &ResultService,
    bulk: BulkResultRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let assessment_id = bulk.assessment_id;

    match storage.save_results_bulk(bulk).await {
        Ok(BulkSaveOutcome::Saved(items)) => {
            let count = items.len();
            let response = BulkResultResponse {
                assessment_id,
                items,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                format!("{count} results saved successfully"),
            )))
        }
        // 任一行无效则整批不写入，并指出是哪一行
        Ok(BulkSaveOutcome::Rejected(rejection)) => {
            let message = format!("Entry {}: {}", rejection.index, rejection.message);
            Ok(HttpResponse::BadRequest().json(ApiResponse::error(
                ErrorCode::ResultBulkInvalid,
                rejection,
                message,
            )))
        }
        Err(e) => Ok(error_response("Save results", ErrorCode::ResultOperationFailed, e)),
    }
}
