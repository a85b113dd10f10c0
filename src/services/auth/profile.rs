use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::errors::SchoolAdminError;
use crate::middlewares::RequireJWT;
use crate::models::auth::requests::UpdateProfileRequest;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::users::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, evict_cached_user, not_found};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, check_password_strength};

use super::AuthService;

pub async fn handle_update_profile(
    service: &AuthService,
    update_data: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let email = update_data.email.map(|e| e.trim().to_string());
    if let Some(email) = &email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    let password = match update_data.password {
        Some(password) => {
            if let Err(msg) = check_password_strength(&password) {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
            }
            match hash_password(&password) {
                Ok(hash) => Some(hash),
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
        None => None,
    };

    // 角色和状态只能由管理员修改
    let storage_update = UpdateUserRequest {
        email,
        password,
        role: None,
        status: None,
        display_name: update_data.display_name,
    };

    let storage = service.get_storage(request);

    match storage.update_user(current_user_id, storage_update).await {
        Ok(Some(user)) => {
            evict_cached_user(request, current_user_id).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserResponse { user },
                "Profile updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::UserNotFound, "User not found")),
        Err(SchoolAdminError::Conflict(_)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::UserEmailAlreadyExists, "Email already exists"),
        )),
        Err(e) => Ok(error_response("Update profile", ErrorCode::UserUpdateFailed, e)),
    }
}
