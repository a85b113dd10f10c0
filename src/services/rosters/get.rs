use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RosterService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn get_roster(
    service: &RosterService,
    roster_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_roster_by_id(roster_id).await {
        Ok(Some(roster)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(roster, "Roster retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::RosterNotFound, "Roster not found")),
        Err(e) => Ok(error_response("Get roster", ErrorCode::RosterOperationFailed, e)),
    }
}
