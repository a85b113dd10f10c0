use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::utils::jwt::{JwtUtils, TokenPair};

/// 账号角色，决定可访问的路由
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    const NAMES: [(UserRole, &'static str); 3] = [
        (UserRole::Student, "student"),
        (UserRole::Teacher, "teacher"),
        (UserRole::Admin, "admin"),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Admin => "admin",
        }
    }

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }

    /// 教学数据（考勤、测评、成绩、背诵记录）的写权限
    pub fn teacher_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher, &Self::Admin]
    }

    /// 公开注册允许的角色，管理员只能由管理员创建
    pub fn self_register_roles() -> &'static [&'static UserRole] {
        &[&Self::Student, &Self::Teacher]
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NAMES
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(role, _)| *role)
            .ok_or_else(|| format!("Invalid user role: {s}"))
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|_| {
            let allowed: Vec<&str> = Self::NAMES.iter().map(|(_, name)| *name).collect();
            serde::de::Error::custom(format!(
                "Unknown role '{raw}', expected one of: {}",
                allowed.join(", ")
            ))
        })
    }
}

/// 账号状态，只有 active 可以登录
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [UserStatus::Active, UserStatus::Inactive, UserStatus::Suspended]
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid user status: {s}"))
    }
}

/// 登录账号；教师和学生档案通过 `user_id` 关联到这里
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub display_name: Option<String>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<TokenPair, String> {
        JwtUtils::generate_token_pair(self.id, self.role.as_str(), refresh_token_expiry)
            .map_err(|e| format!("Failed to issue tokens for user {}: {e}", self.id))
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names_parse_back() {
        for (role, name) in UserRole::NAMES {
            assert_eq!(name.parse::<UserRole>().unwrap(), role);
            assert_eq!(role.to_string(), name);
        }
        assert!("user".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_unknown_role_lists_allowed_values() {
        let err = serde_json::from_str::<UserRole>("\"root\"").unwrap_err();
        assert!(err.to_string().contains("student, teacher, admin"));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("suspended".parse::<UserStatus>().unwrap(), UserStatus::Suspended);
        assert!("banned".parse::<UserStatus>().is_err());
        let json = serde_json::to_string(&UserStatus::Inactive).unwrap();
        assert_eq!(json, "\"inactive\"");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let now = chrono::Utc::now();
        let user = User {
            id: 1,
            username: "amina".to_string(),
            email: "amina@school.org".to_string(),
            password_hash: "secret".to_string(),
            role: UserRole::Teacher,
            status: UserStatus::Active,
            display_name: None,
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(!user.is_admin());
    }
}
