use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use crate::models::users::entities::UserStatus;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{BEARER_TOKEN_TYPE, LoginRequest, LoginResponse},
};
use crate::services::error_response;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;

fn login_failed() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::AuthFailed,
        "Username or password is incorrect",
    ))
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 用户名或邮箱均可登录
    let user = match storage
        .get_user_by_username_or_email(login_request.username.trim())
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(login_failed()),
        Err(e) => return Ok(error_response("Login", ErrorCode::AuthFailed, e)),
    };

    // 2. 校验密码
    if !verify_password(&login_request.password, &user.password_hash) {
        info!("Failed login attempt for {}", user.username);
        return Ok(login_failed());
    }

    if user.status != UserStatus::Active {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Account is not active",
        )));
    }

    // 3. 最后登录时间
    if let Err(e) = storage.update_last_login(user.id).await {
        warn!("Failed to update last login for user {}: {}", user.id, e);
    }

    // 4. 生成令牌对
    let refresh_lifetime = chrono::Duration::days(if login_request.remember_me {
        config.jwt.refresh_token_remember_me_expiry
    } else {
        config.jwt.refresh_token_expiry
    });

    match user.generate_token_pair(Some(refresh_lifetime)) {
        Ok(token_pair) => {
            info!("User {} logged in successfully", user.username);

            let refresh_cookie =
                JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token, refresh_lifetime);
            let response = LoginResponse {
                access_token: token_pair.access_token,
                token_type: BEARER_TOKEN_TYPE.to_string(),
                expires_in: JwtUtils::access_token_ttl_secs(),
                user,
            };

            Ok(HttpResponse::Ok()
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
