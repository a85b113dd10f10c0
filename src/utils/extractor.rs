//! 路径参数提取器

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use crate::models::{ApiResponse, ErrorCode};

#[derive(Debug)]
pub struct InvalidIdError {
    param: &'static str,
    raw: String,
}

impl InvalidIdError {
    pub fn new(param: &'static str, raw: &str) -> Self {
        Self {
            param,
            raw: raw.to_string(),
        }
    }
}

impl fmt::Display for InvalidIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: '{}'", self.param, self.raw)
    }
}

impl ResponseError for InvalidIdError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            self.to_string(),
        ))
    }
}

pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// 定义从路径段提取正整数的提取器
///
/// ```rust,ignore
/// define_safe_i64_extractor!(SafeSurahId, "surah");
/// ```
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = $crate::utils::extractor::InvalidIdError;
            type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let raw = req.match_info().get($param).unwrap_or_default();
                futures_util::future::ready(
                    $crate::utils::extractor::parse_id(raw)
                        .map($name)
                        .ok_or_else(|| $crate::utils::extractor::InvalidIdError::new($param, raw)),
                )
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test, web};

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("abc"), None);
    }

    #[actix_web::test]
    async fn test_invalid_id_is_bad_request() {
        let app = actix_test::init_service(App::new().route(
            "/items/{id}",
            web::get().to(|id: SafeIDI64| async move { HttpResponse::Ok().body(id.0.to_string()) }),
        ))
        .await;

        let req = actix_test::TestRequest::get().uri("/items/7").to_request();
        assert_eq!(actix_test::call_and_read_body(&app, req).await, "7");

        let req = actix_test::TestRequest::get().uri("/items/x1").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
