use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RosterService;
use crate::models::{ApiResponse, ErrorCode, rosters::requests::CreateRosterRequest};
use crate::services::error_response;

pub async fn create_roster(
    service: &RosterService,
    mut roster_data: CreateRosterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = roster_data.normalize() {
        return Ok(error_response("Create roster", ErrorCode::RosterOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.create_roster(roster_data).await {
        Ok(roster) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(roster, "Roster created successfully"))),
        Err(e) => Ok(error_response("Create roster", ErrorCode::RosterOperationFailed, e)),
    }
}
