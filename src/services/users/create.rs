use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::errors::SchoolAdminError;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::CreateUserRequest, responses::UserResponse},
};
use crate::services::error_response;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, check_password_strength, validate_username};

/// 校验账号字段并把明文密码替换为哈希；注册与管理员建号共用
pub(crate) fn prepare_new_user(user_data: &mut CreateUserRequest) -> Result<(), HttpResponse> {
    user_data.username = user_data.username.trim().to_string();
    user_data.email = user_data.email.trim().to_string();

    if let Err(msg) = validate_username(&user_data.username) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&user_data.email) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    if let Err(msg) = check_password_strength(&user_data.password) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    user_data.password = hash_password(&user_data.password).map_err(|e| {
        error!("Password hashing failed: {}", e);
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::UserCreationFailed,
            "Password hashing failed",
        ))
    })?;

    Ok(())
}

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(resp) = prepare_new_user(&mut user_data) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("User {} created with role {}", user.username, user.role);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(UserResponse { user }, "User created successfully")))
        }
        Err(SchoolAdminError::Conflict(_)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "Username or email already exists",
            ),
        )),
        Err(e) => Ok(error_response("Create user", ErrorCode::UserCreationFailed, e)),
    }
}
