/*!
 * JWT 认证中间件
 *
 * 校验 `Authorization: Bearer <access_token>`，通过后把当前用户放进请求扩展，
 * 处理函数用 [`RequireJWT::extract_user_claims`] 等辅助函数读取。
 *
 * ```rust,ignore
 * web::scope("/api/v1/students")
 *     .wrap(RequireJWT)
 *     .route("", web::get().to(list_students))
 * ```
 *
 * 用户按 ID 缓存（键见 [`user_cache_key`]），用户被修改或删除时由服务层清除，
 * 停用的账号因此会在下一次请求时被拒绝。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;
use crate::cache::{ObjectCache, get_json, put_json, user_cache_key};
use crate::config::AppConfig;
use crate::models::ErrorCode;
use crate::models::users::entities::{User, UserStatus};
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub struct RequireJWT;

/// 取出 Bearer token，前缀大小写不敏感
pub(crate) fn bearer_token(header: Option<&str>) -> Option<&str> {
    let header = header?.trim();
    let prefix = header.get(..BEARER_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(BEARER_PREFIX) {
        return None;
    }
    let token = header[BEARER_PREFIX.len()..].trim();
    (!token.is_empty()).then_some(token)
}

async fn authenticate(req: &ServiceRequest) -> Result<User, &'static str> {
    let token = bearer_token(
        req.headers()
            .get(actix_web::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok()),
    )
    .ok_or("Missing or invalid Authorization header")?;

    let claims = JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid or expired token"
    })?;
    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| "Invalid user ID in token")?;

    let cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|c| c.get_ref().clone())
        .ok_or("Authentication backend unavailable")?;
    let key = user_cache_key(user_id);

    if let Some(user) = get_json::<User>(cache.as_ref(), &key).await {
        return Ok(user);
    }

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|s| s.get_ref().clone())
        .ok_or("Authentication backend unavailable")?;

    let user = storage
        .get_user_by_id(user_id)
        .await
        .map_err(|e| {
            info!("Failed to load user {}: {}", user_id, e);
            "Failed to load user"
        })?
        .ok_or("User not found")?;

    if user.status != UserStatus::Active {
        return Err("User is not active");
    }

    put_json(
        cache.as_ref(),
        key,
        &user,
        AppConfig::get().cache.default_ttl,
    )
    .await;

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
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
        Box::pin(async move {
            // 预检请求直接放行给 CORS 处理
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(
                    req.into_response(HttpResponse::NoContent().finish().map_into_right_body())
                );
            }

            match authenticate(&req).await {
                Ok(user) => {
                    debug!("JWT authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            err,
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireJWT {
    /// 当前用户；只能在 RequireJWT 之后的处理函数中使用
    pub fn extract_user_claims(req: &HttpRequest) -> Option<User> {
        req.extensions().get::<User>().cloned()
    }

    pub fn extract_user_id(req: &HttpRequest) -> Option<i64> {
        req.extensions().get::<User>().map(|user| user.id)
    }

    pub fn is_admin(req: &HttpRequest) -> bool {
        req.extensions().get::<User>().is_some_and(User::is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use crate::models::users::entities::UserRole;
    use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use actix_web::{App, test as actix_test};

    async fn whoami(req: HttpRequest) -> HttpResponse {
        match RequireJWT::extract_user_claims(&req) {
            Some(user) => HttpResponse::Ok().body(user.username),
            None => HttpResponse::InternalServerError().finish(),
        }
    }

    async fn setup() -> (Arc<dyn Storage>, Arc<dyn ObjectCache>, User) {
        let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::in_memory().await);
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(100, 60));
        let user = storage
            .create_user(CreateUserRequest {
                username: "teacher01".to_string(),
                email: "teacher01@school.org".to_string(),
                password: "hash".to_string(),
                role: UserRole::Teacher,
                display_name: None,
            })
            .await
            .unwrap();
        (storage, cache, user)
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(Some("Bearer abc")), Some("abc"));
        assert_eq!(bearer_token(Some("bearer  abc ")), Some("abc"));
        assert_eq!(bearer_token(Some("Bearer ")), None);
        assert_eq!(bearer_token(Some("Basic abc")), None);
        assert_eq!(bearer_token(None), None);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let (storage, cache, user) = setup().await;
        let token = JwtUtils::generate_access_token(user.id, "teacher").unwrap();

        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(cache))
                .service(web::scope("/me").wrap(RequireJWT).route("", web::get().to(whoami))),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let body = actix_test::call_and_read_body(&app, req).await;
        assert_eq!(body, "teacher01");
    }

    #[actix_web::test]
    async fn test_missing_or_refresh_token_is_rejected() {
        let (storage, cache, user) = setup().await;
        let refresh = JwtUtils::generate_refresh_token(user.id, "teacher", None).unwrap();

        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(cache))
                .service(web::scope("/me").wrap(RequireJWT).route("", web::get().to(whoami))),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/me").to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let req = actix_test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {refresh}")))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_suspended_user_is_rejected_after_cache_eviction() {
        let (storage, cache, user) = setup().await;
        let token = JwtUtils::generate_access_token(user.id, "teacher").unwrap();

        storage
            .update_user(
                user.id,
                UpdateUserRequest {
                    status: Some(UserStatus::Suspended),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        cache.remove(&user_cache_key(user.id)).await;

        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(cache))
                .service(web::scope("/me").wrap(RequireJWT).route("", web::get().to(whoami))),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
