//! JWT 令牌签发与校验
//!
//! access token 放在 `Authorization` 头中，refresh token 只通过 HttpOnly cookie 下发。

use actix_web::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

pub const REFRESH_COOKIE_NAME: &str = "refresh_token";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // 用户 ID
    pub role: String,
    pub token_type: TokenType,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<i64, JwtError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| JwtError::from(ErrorKind::InvalidSubject))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn secret() -> &'static [u8] {
        AppConfig::get().jwt.secret.as_bytes()
    }

    fn sign(
        user_id: i64,
        role: &str,
        token_type: TokenType,
        lifetime: Duration,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            token_type,
            exp: (now + lifetime).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(Self::secret()),
        )
    }

    /// access token 有效期（秒）
    pub fn access_token_ttl_secs() -> i64 {
        AppConfig::get().jwt.access_token_expiry * 60
    }

    pub fn generate_access_token(user_id: i64, role: &str) -> Result<String, JwtError> {
        let minutes = AppConfig::get().jwt.access_token_expiry;
        Self::sign(user_id, role, TokenType::Access, Duration::minutes(minutes))
    }

    /// `lifetime` 为空时使用配置中的默认天数
    pub fn generate_refresh_token(
        user_id: i64,
        role: &str,
        lifetime: Option<Duration>,
    ) -> Result<String, JwtError> {
        let lifetime = lifetime
            .unwrap_or_else(|| Duration::days(AppConfig::get().jwt.refresh_token_expiry));
        Self::sign(user_id, role, TokenType::Refresh, lifetime)
    }

    pub fn generate_token_pair(
        user_id: i64,
        role: &str,
        refresh_lifetime: Option<Duration>,
    ) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: Self::generate_access_token(user_id, role)?,
            refresh_token: Self::generate_refresh_token(user_id, role, refresh_lifetime)?,
        })
    }

    fn verify(token: &str, expected: TokenType) -> Result<Claims, JwtError> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(Self::secret()),
            &Validation::default(),
        )?
        .claims;

        if claims.token_type != expected {
            return Err(JwtError::from(ErrorKind::InvalidToken));
        }
        Ok(claims)
    }

    pub fn verify_access_token(token: &str) -> Result<Claims, JwtError> {
        Self::verify(token, TokenType::Access)
    }

    pub fn verify_refresh_token(token: &str) -> Result<Claims, JwtError> {
        Self::verify(token, TokenType::Refresh)
    }

    fn refresh_cookie(
        value: String,
        max_age: actix_web::cookie::time::Duration,
    ) -> Cookie<'static> {
        Cookie::build(REFRESH_COOKIE_NAME, value)
            .path("/")
            .max_age(max_age)
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    pub fn create_refresh_token_cookie(refresh_token: &str, lifetime: Duration) -> Cookie<'static> {
        Self::refresh_cookie(
            refresh_token.to_string(),
            actix_web::cookie::time::Duration::seconds(lifetime.num_seconds()),
        )
    }

    /// 注销时覆盖浏览器中的 refresh token
    pub fn create_empty_refresh_token_cookie() -> Cookie<'static> {
        Self::refresh_cookie(String::new(), actix_web::cookie::time::Duration::ZERO)
    }

    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_types_are_not_interchangeable() {
        let pair = JwtUtils::generate_token_pair(12, "teacher", None).unwrap();

        let claims = JwtUtils::verify_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.user_id().unwrap(), 12);
        assert_eq!(claims.role, "teacher");

        assert!(JwtUtils::verify_refresh_token(&pair.refresh_token).is_ok());
        assert!(JwtUtils::verify_access_token(&pair.refresh_token).is_err());
        assert!(JwtUtils::verify_refresh_token(&pair.access_token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token =
            JwtUtils::sign(1, "admin", TokenType::Access, Duration::minutes(-10)).unwrap();
        assert!(JwtUtils::verify_access_token(&token).is_err());
    }

    #[test]
    fn test_refresh_cookie_is_http_only() {
        let cookie = JwtUtils::create_refresh_token_cookie("abc", Duration::days(7));
        assert_eq!(cookie.name(), REFRESH_COOKIE_NAME);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.max_age().map(|d| d.whole_days()), Some(7));

        let empty = JwtUtils::create_empty_refresh_token_cookie();
        assert_eq!(empty.value(), "");
    }
}
