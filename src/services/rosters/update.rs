use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RosterService;
use crate::models::{ApiResponse, ErrorCode, rosters::requests::UpdateRosterRequest};
use crate::services::{error_response, not_found};

pub async fn update_roster(
    service: &RosterService,
    roster_id: i64,
    mut update_data: UpdateRosterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.normalize() {
        return Ok(error_response("Update roster", ErrorCode::RosterOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.update_roster(roster_id, update_data).await {
        Ok(Some(roster)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(roster, "Roster updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::RosterNotFound, "Roster not found")),
        Err(e) => Ok(error_response("Update roster", ErrorCode::RosterOperationFailed, e)),
    }
}
