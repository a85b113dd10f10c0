/*!
 * 基于角色的访问控制中间件
 *
 * 必须放在 RequireJWT 之内（即先认证再授权）。用户角色在允许列表中才放行，
 * 否则返回 403。
 *
 * ```rust,ignore
 * web::scope("/api/v1/finance")
 *     .wrap(RequireRole::new_any(UserRole::admin_roles()))
 *     .wrap(RequireJWT)
 * ```
 *
 * actix 中后注册的 wrap 先执行，所以 RequireJWT 写在后面。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use super::create_error_response;
use crate::models::{
    ErrorCode,
    users::entities::{User, UserRole},
};

#[derive(Clone)]
pub struct RequireRole {
    allowed_roles: Vec<UserRole>,
}

impl RequireRole {
    pub fn new(role: &UserRole) -> Self {
        Self::new_any(&[role])
    }

    /// 任一角色即可
    pub fn new_any(roles: &[&UserRole]) -> Self {
        Self {
            allowed_roles: roles.iter().map(|r| **r).collect(),
        }
    }

    pub fn permits(&self, role: &UserRole) -> bool {
        self.allowed_roles.contains(role)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            rule: self.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    rule: RequireRole,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let rule = self.rule.clone();

        Box::pin(async move {
            let current = req
                .extensions()
                .get::<User>()
                .map(|user| (user.id, user.role));

            match current {
                Some((_, role)) if rule.permits(&role) => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Some((user_id, role)) => {
                    info!(
                        "Access denied for user {} (role: {}) on {}. Allowed roles: {:?}",
                        user_id,
                        role,
                        req.path(),
                        rule.allowed_roles
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::FORBIDDEN,
                            ErrorCode::Forbidden,
                            "Access denied",
                        )
                        .map_into_right_body(),
                    ))
                }
                None => {
                    info!("Role check without authenticated user on {}", req.path());
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Authentication required",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use chrono::Utc;

    fn user(role: UserRole) -> User {
        User {
            id: 3,
            username: "someone".to_string(),
            email: "someone@school.org".to_string(),
            password_hash: String::new(),
            role,
            status: crate::models::users::entities::UserStatus::Active,
            display_name: None,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_permits() {
        let admin_only = RequireRole::new(&UserRole::Admin);
        assert!(admin_only.permits(&UserRole::Admin));
        assert!(!admin_only.permits(&UserRole::Teacher));

        let staff = RequireRole::new_any(UserRole::teacher_roles());
        assert!(staff.permits(&UserRole::Teacher));
        assert!(staff.permits(&UserRole::Admin));
        assert!(!staff.permits(&UserRole::Student));
    }

    async fn status_for(role: Option<UserRole>) -> StatusCode {
        let app = actix_test::init_service(
            App::new()
                .wrap_fn(move |req, srv| {
                    if let Some(role) = role {
                        req.extensions_mut().insert(user(role));
                    }
                    srv.call(req)
                })
                .service(
                    web::resource("/finance")
                        .wrap(RequireRole::new_any(UserRole::admin_roles()))
                        .route(web::get().to(|| async { HttpResponse::Ok().finish() })),
                ),
        )
        .await;
        let req = actix_test::TestRequest::get().uri("/finance").to_request();
        actix_test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_middleware_statuses() {
        assert_eq!(status_for(Some(UserRole::Admin)).await, StatusCode::OK);
        assert_eq!(status_for(Some(UserRole::Teacher)).await, StatusCode::FORBIDDEN);
        assert_eq!(status_for(None).await, StatusCode::UNAUTHORIZED);
    }
}
