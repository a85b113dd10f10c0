use serde::Deserialize;
use ts_rs::TS;

use crate::models::users::entities::UserRole;

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 用户名或邮箱
    pub username: String,
    /// 密码
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}

// 公开注册请求，只允许学生或教师角色
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_register_role")]
    pub role: UserRole,
    pub display_name: Option<String>,
}

fn default_register_role() -> UserRole {
    UserRole::Student
}

// 当前用户更新自己的资料
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_role_defaults_to_student() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"username": "yusuf01", "email": "y@school.org", "password": "Madrasa2024"}"#,
        )
        .unwrap();
        assert_eq!(req.role, UserRole::Student);
    }
}
