use crate::models::users::entities::User;
use serde::Serialize;
use ts_rs::TS;

/// 登录成功后返回访问令牌；刷新令牌只放在 HttpOnly Cookie 中
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    // 访问令牌有效期（秒）
    pub expires_in: i64,
    pub user: User,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RefreshTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct UserInfoResponse {
    pub user: User,
}

/// 令牌校验结果；无效时其余字段为空
#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct TokenVerificationResponse {
    pub is_valid: bool,
    pub user_id: Option<i64>,
    pub role: Option<String>,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

pub const BEARER_TOKEN_TYPE: &str = "Bearer";
