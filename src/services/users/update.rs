use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::errors::SchoolAdminError;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::UpdateUserRequest, responses::UserResponse},
};
use crate::services::{error_response, evict_cached_user, not_found};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, check_password_strength};

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    mut update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(email) = &update_data.email
        && let Err(msg) = validate_email(email.trim())
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    if let Some(password) = &update_data.password {
        if let Err(msg) = check_password_strength(password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
        }
        match hash_password(password) {
            Ok(hash) => update_data.password = Some(hash),
            Err(e) => {
                error!("Password hashing failed: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::UserUpdateFailed,
                        "Password hashing failed",
                    )),
                );
            }
        }
    }

    let storage = service.get_storage(request);

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => {
            evict_cached_user(request, user_id).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserResponse { user },
                "User information updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(SchoolAdminError::Conflict(_)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::UserEmailAlreadyExists, "Email already exists"),
        )),
        Err(e) => Ok(error_response("Update user", ErrorCode::UserUpdateFailed, e)),
    }
}
