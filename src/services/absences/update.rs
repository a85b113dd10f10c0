use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AbsenceService, teacher_absence_denied};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, absences::requests::UpdateAbsenceRequest};
use crate::services::{error_response, not_found};

pub async fn update_absence(
    service: &AbsenceService,
    absence_id: i64,
    update_data: UpdateAbsenceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if !RequireJWT::is_admin(request) {
        let existing = match storage.get_absence_by_id(absence_id).await {
            Ok(Some(absence)) => absence,
            Ok(None) => return Ok(not_found(ErrorCode::AbsenceNotFound, "Absence not found")),
            Err(e) => {
                return Ok(error_response(
                    "Update absence",
                    ErrorCode::AbsenceOperationFailed,
                    e,
                ));
            }
        };
        if existing.is_teacher_absence() || update_data.sets_teacher() {
            return Ok(teacher_absence_denied());
        }
    }

    match storage.update_absence(absence_id, update_data).await {
        Ok(Some(absence)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(absence, "Absence updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::AbsenceNotFound, "Absence not found")),
        Err(e) => Ok(error_response("Update absence", ErrorCode::AbsenceOperationFailed, e)),
    }
}
