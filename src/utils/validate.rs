//! 输入校验：账号字段、密码强度以及通用的名称字段

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result as AppResult, SchoolAdminError};

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("Invalid email regex")
});

const USERNAME_LEN: std::ops::RangeInclusive<usize> = 3..=32;
const MIN_PASSWORD_LEN: usize = 8;
const MAX_NAME_LEN: usize = 100;

// 小写比较
const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "password1",
    "12345678",
    "123456789",
    "qwerty123",
    "admin123",
    "abcd1234",
    "school123",
    "teacher123",
    "student123",
    "madrasa123",
];

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if !USERNAME_LEN.contains(&username.chars().count()) {
        return Err("Username length must be between 3 and 32 characters");
    }
    // 首字符必须是字母或数字
    if !USERNAME_RE.is_match(username) {
        return Err("Username may contain only letters, digits, dots, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 列出密码不满足的所有规则，空列表表示通过
///
/// 规则：至少 8 个字符，同时包含大小写字母和数字，且不在常见弱密码表中。
pub fn password_problems(password: &str) -> Vec<&'static str> {
    let checks: [(bool, &'static str); 5] = [
        (
            password.chars().count() >= MIN_PASSWORD_LEN,
            "Password must be at least 8 characters long",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Password must contain at least one uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Password must contain at least one lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Password must contain at least one digit",
        ),
        (
            !COMMON_PASSWORDS.contains(&password.to_ascii_lowercase().as_str()),
            "Password is too common, please choose a stronger password",
        ),
    ];

    checks
        .into_iter()
        .filter_map(|(ok, message)| (!ok).then_some(message))
        .collect()
}

/// 密码强度校验，多条问题以 `; ` 拼接
pub fn check_password_strength(password: &str) -> Result<(), String> {
    let problems = password_problems(password);
    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems.join("; "))
    }
}

/// 必填文本字段不能为空白
pub fn require_non_blank(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(SchoolAdminError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// 规范化名称：去掉首尾空白，并限制长度
pub fn normalize_name(field: &str, value: &str) -> AppResult<String> {
    require_non_blank(field, value)?;
    let trimmed = value.trim();
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(SchoolAdminError::validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("teacher_01").is_ok());
        assert!(validate_username("a.karim").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username(".hidden").is_err());
        assert!(validate_username("bad name!").is_err());
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("office@school.org").is_ok());
        assert!(validate_email("office@mail.school.org").is_ok());
        assert!(validate_email("office@school").is_err());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_required_text() {
        assert!(require_non_blank("name", "  ").is_err());
        assert_eq!(normalize_name("name", "  Room A ").unwrap(), "Room A");
        assert!(normalize_name("name", &"x".repeat(101)).is_err());
    }

    #[test]
    fn test_strong_password_passes() {
        assert!(password_problems("Madrasa2024").is_empty());
        assert!(check_password_strength("SecurePass123").is_ok());
    }

    #[test]
    fn test_each_rule_is_reported() {
        assert_eq!(
            password_problems("Ab1"),
            vec!["Password must be at least 8 characters long"]
        );
        assert_eq!(
            password_problems("abcd12345"),
            vec!["Password must contain at least one uppercase letter"]
        );
        assert_eq!(
            password_problems("ABCD12345"),
            vec!["Password must contain at least one lowercase letter"]
        );
        assert_eq!(
            password_problems("AbcdEfgh"),
            vec!["Password must contain at least one digit"]
        );
    }

    #[test]
    fn test_common_password_rejected_case_insensitively() {
        let err = check_password_strength("Madrasa123").unwrap_err();
        assert!(err.contains("too common"));
    }

    #[test]
    fn test_problems_are_joined() {
        let err = check_password_strength("abc").unwrap_err();
        assert!(err.contains("; "));
    }
}
