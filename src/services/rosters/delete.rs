use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RosterService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn delete_roster(
    service: &RosterService,
    roster_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_roster(roster_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Roster deleted successfully"))),
        Ok(false) => Ok(not_found(ErrorCode::RosterNotFound, "Roster not found")),
        Err(e) => Ok(error_response("Delete roster", ErrorCode::RosterOperationFailed, e)),
    }
}
