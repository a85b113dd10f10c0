use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::errors::SchoolAdminError;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::models::users::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode, auth::RegisterRequest};
use crate::services::error_response;
use crate::services::users::create::prepare_new_user;

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 管理员账号只能由管理员创建
    if !UserRole::self_register_roles()
        .iter()
        .any(|role| **role == register_request.role)
    {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::RegisterRoleNotAllowed,
            "Only student or teacher accounts can be registered",
        )));
    }

    let mut create_request = CreateUserRequest {
        username: register_request.username,
        email: register_request.email,
        password: register_request.password,
        role: register_request.role,
        display_name: register_request.display_name,
    };
    if let Err(resp) = prepare_new_user(&mut create_request) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);

    match storage.create_user(create_request).await {
        Ok(user) => {
            info!("User {} registered as {}", user.username, user.role);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                UserResponse { user },
                "Registration successful",
            )))
        }
        Err(SchoolAdminError::Conflict(_)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "Username or email already exists",
            ),
        )),
        Err(e) => Ok(error_response("Register", ErrorCode::RegisterFailed, e)),
    }
}
