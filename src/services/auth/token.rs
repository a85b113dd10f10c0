use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::middlewares::require_jwt::{RequireJWT, bearer_token};
use crate::models::auth::{
    BEARER_TOKEN_TYPE, RefreshTokenResponse, TokenVerificationResponse, UserInfoResponse,
};
use crate::models::users::entities::UserStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

fn refresh_rejected() -> HttpResponse {
    // 同时清掉无效的 cookie
    HttpResponse::Unauthorized()
        .cookie(JwtUtils::create_empty_refresh_token_cookie())
        .json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Login expired or invalid, please login again",
        ))
}

/// 用 cookie 中的 refresh token 换新的 access token；账号被停用或删除后不再续期
pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let user_id = match JwtUtils::verify_refresh_token(&refresh_token)
        .and_then(|claims| claims.user_id())
    {
        Ok(user_id) => user_id,
        Err(e) => {
            info!("Refresh token rejected: {}", e);
            return Ok(refresh_rejected());
        }
    };

    let storage = service.get_storage(request);
    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.status == UserStatus::Active => user,
        Ok(_) => return Ok(refresh_rejected()),
        Err(e) => {
            return Ok(crate::services::error_response(
                "Refresh token",
                ErrorCode::InternalServerError,
                e,
            ));
        }
    };

    // 角色以数据库为准
    match JwtUtils::generate_access_token(user.id, &user.role.to_string()) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RefreshTokenResponse {
                access_token,
                token_type: BEARER_TOKEN_TYPE.to_string(),
                expires_in: JwtUtils::access_token_ttl_secs(),
            },
            "Token refreshed successfully",
        ))),
        Err(e) => {
            tracing::error!("Failed to generate access token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Unable to refresh token",
                )),
            )
        }
    }
}

/// 只校验签名与有效期，不查库
pub async fn handle_verify_token(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let claims = bearer_token(
        request
            .headers()
            .get(actix_web::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok()),
    )
    .and_then(|token| JwtUtils::verify_access_token(token).ok());

    let (verification, message) = match claims {
        Some(claims) => (
            TokenVerificationResponse {
                is_valid: true,
                user_id: claims.user_id().ok(),
                expires_at: chrono::DateTime::from_timestamp(claims.exp as i64, 0),
                role: Some(claims.role),
            },
            "Token is valid",
        ),
        None => (
            TokenVerificationResponse::default(),
            "Token is invalid or expired",
        ),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(verification, message)))
}

pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "User information retrieved successfully",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))),
    }
}
