use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RosterService;
use crate::models::{ApiResponse, ErrorCode, rosters::requests::RosterListParams};
use crate::services::error_response;

pub async fn list_rosters(
    service: &RosterService,
    query: RosterListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_rosters_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Roster list retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List rosters", ErrorCode::RosterOperationFailed, e)),
    }
}
