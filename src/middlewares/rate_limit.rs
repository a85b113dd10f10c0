/*!
 * 登录与注册的速率限制
 *
 * 按客户端 IP 在固定时间窗口内计数，超过上限返回 429，
 * 并通过 `Retry-After` 告知剩余等待秒数。
 *
 * ```rust,ignore
 * web::resource("/login")
 *     .wrap(RateLimit::login())
 *     .route(web::post().to(login))
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::net::IpAddr;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode};

/// 键: `前缀:ip`，值: (窗口开始时间, 计数)
static RATE_LIMIT_CACHE: Lazy<Cache<String, (Instant, u32)>> = Lazy::new(|| {
    Cache::builder()
        .time_to_idle(Duration::from_secs(600))
        .max_capacity(100_000)
        .build()
});

#[derive(Clone)]
pub struct RateLimit {
    max_requests: u32,
    window_secs: u64,
    key_prefix: &'static str,
}

impl RateLimit {
    pub fn new(key_prefix: &'static str, max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix,
        }
    }

    /// 登录限流，默认 5 次/分钟/IP
    pub fn login() -> Self {
        let limits = &AppConfig::get().rate_limit;
        Self::new("login", limits.login_max_requests, limits.window_secs)
    }

    /// 注册限流，默认 3 次/分钟/IP
    pub fn register() -> Self {
        let limits = &AppConfig::get().rate_limit;
        Self::new("register", limits.register_max_requests, limits.window_secs)
    }
}

/// 计数一次请求；超限时返回还需等待的秒数
async fn hit(key: String, max_requests: u32, window: Duration) -> Option<u64> {
    let now = Instant::now();
    let (started, count) = match RATE_LIMIT_CACHE.get(&key).await {
        Some((started, count)) if now.duration_since(started) < window => (started, count),
        _ => (now, 0),
    };

    if count >= max_requests {
        let elapsed = now.duration_since(started);
        return Some(window.saturating_sub(elapsed).as_secs().max(1));
    }

    RATE_LIMIT_CACHE.insert(key, (started, count + 1)).await;
    None
}

/// 客户端 IP：优先连接信息，其次转发头
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ip) = connection_ip.as_deref().and_then(parse_ip) {
        return ip;
    }

    if let Some(ip) = req
        .headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(parse_ip)
    {
        return ip;
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

// realip_remote_addr 可能带端口
fn parse_ip(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Ok(ip) = raw.parse::<IpAddr>() {
        return Some(ip.to_string());
    }
    raw.parse::<std::net::SocketAddr>()
        .ok()
        .map(|addr| addr.ip().to_string())
}

fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let limit = self.limit.clone();

        Box::pin(async move {
            let key = format!("{}:{}", limit.key_prefix, extract_client_ip(&req));
            let window = Duration::from_secs(limit.window_secs);

            if let Some(retry_after) = hit(key.clone(), limit.max_requests, window).await {
                warn!(
                    "Rate limit exceeded for {} (max {} per {}s)",
                    key, limit.max_requests, limit.window_secs
                );
                return Ok(req
                    .into_response(create_rate_limit_response(retry_after).map_into_right_body()));
            }

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test as actix_test, web};

    #[test]
    fn test_presets() {
        let login = RateLimit::login();
        assert_eq!((login.max_requests, login.window_secs), (5, 60));
        assert_eq!(login.key_prefix, "login");

        let register = RateLimit::register();
        assert_eq!((register.max_requests, register.window_secs), (3, 60));
    }

    #[actix_web::test]
    async fn test_window_blocks_after_limit() {
        let key = "test-window:10.0.0.1".to_string();
        let window = Duration::from_secs(60);
        assert!(hit(key.clone(), 2, window).await.is_none());
        assert!(hit(key.clone(), 2, window).await.is_none());
        let retry = hit(key.clone(), 2, window).await;
        assert!(matches!(retry, Some(secs) if secs >= 1 && secs <= 60));
        // 其它 IP 不受影响
        assert!(hit("test-window:10.0.0.2".to_string(), 2, window).await.is_none());
    }

    #[actix_web::test]
    async fn test_middleware_returns_429() {
        let app = actix_test::init_service(
            App::new().service(
                web::resource("/login")
                    .wrap(RateLimit::new("test-mw", 1, 60))
                    .route(web::post().to(|| async { HttpResponse::Ok().finish() })),
            ),
        )
        .await;

        let first = actix_test::TestRequest::post()
            .uri("/login")
            .peer_addr("192.0.2.7:4000".parse().unwrap())
            .to_request();
        assert!(actix_test::call_service(&app, first).await.status().is_success());

        let second = actix_test::TestRequest::post()
            .uri("/login")
            .peer_addr("192.0.2.7:4001".parse().unwrap())
            .to_request();
        let res = actix_test::call_service(&app, second).await;
        assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(res.headers().contains_key("Retry-After"));
    }

    #[test]
    fn test_parse_ip_strips_port() {
        assert_eq!(parse_ip("127.0.0.1:8080").as_deref(), Some("127.0.0.1"));
        assert_eq!(parse_ip(" ::1 ").as_deref(), Some("::1"));
        assert!(parse_ip("not-an-ip").is_none());
    }
}
