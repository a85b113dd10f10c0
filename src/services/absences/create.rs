use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AbsenceService, teacher_absence_denied};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, absences::requests::CreateAbsenceRequest};
use crate::services::error_response;

pub async fn create_absence(
    service: &AbsenceService,
    absence_data: CreateAbsenceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = absence_data.validate() {
        return Ok(error_response("Create absence", ErrorCode::AbsenceOperationFailed, e));
    }

    // 教师缺勤只能由管理员登记
    if absence_data.teacher_id.is_some() && !RequireJWT::is_admin(request) {
        return Ok(teacher_absence_denied());
    }

    let storage = service.get_storage(request);
    let recorded_by = RequireJWT::extract_user_id(request);

    match storage.create_absence(absence_data, recorded_by).await {
        Ok(absence) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(absence, "Absence created successfully"))),
        Err(e) => Ok(error_response("Create absence", ErrorCode::AbsenceOperationFailed, e)),
    }
}
