use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AbsenceService, teacher_absence_denied};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn delete_absence(
    service: &AbsenceService,
    absence_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if !RequireJWT::is_admin(request) {
        match storage.get_absence_by_id(absence_id).await {
            Ok(Some(absence)) if absence.is_teacher_absence() => {
                return Ok(teacher_absence_denied());
            }
            Ok(Some(_)) => {}
            Ok(None) => return Ok(not_found(ErrorCode::AbsenceNotFound, "Absence not found")),
            Err(e) => {
                return Ok(error_response(
                    "Delete absence",
                    ErrorCode::AbsenceOperationFailed,
                    e,
                ));
            }
        }
    }

    match storage.delete_absence(absence_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Absence deleted successfully"))),
        Ok(false) => Ok(not_found(ErrorCode::AbsenceNotFound, "Absence not found")),
        Err(e) => Ok(error_response("Delete absence", ErrorCode::AbsenceOperationFailed, e)),
    }
}
