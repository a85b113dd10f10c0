use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest, UserListParams};
use crate::services::UserService;
use crate::utils::SafeIDI64;

static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn list_users(
    req: HttpRequest,
    query: web::Query<UserListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(query.into_inner(), &req).await
}

pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(user_data.into_inner(), &req).await
}

pub async fn get_user(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(user_id.0, &req).await
}

pub async fn update_user(
    req: HttpRequest,
    user_id: SafeIDI64,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user(user_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_user(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_user(user_id.0, &req).await
}

// 账号管理整体仅限管理员；自助修改资料走 /auth/me
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new(&UserRole::Admin))
                    .service(
                        web::resource("")
                            .route(web::get().to(list_users))
                            .route(web::post().to(create_user)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(get_user))
                            .route(web::put().to(update_user))
                            .route(web::delete().to(delete_user)),
                    ),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ObjectCache;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::utils::jwt::JwtUtils;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use std::sync::Arc;

    async fn token_for(storage: &Arc<dyn Storage>, username: &str, role: UserRole) -> String {
        let user = storage
            .create_user(CreateUserRequest {
                username: username.to_string(),
                email: format!("{username}@school.org"),
                password: "hash".to_string(),
                role,
                display_name: None,
            })
            .await
            .unwrap();
        JwtUtils::generate_access_token(user.id, &user.role.to_string()).unwrap()
    }

    #[actix_web::test]
    async fn test_user_scope_is_admin_only() {
        let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::in_memory().await);
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(100, 60));
        let teacher = token_for(&storage, "teacher01", UserRole::Teacher).await;
        let admin = token_for(&storage, "admin01", UserRole::Admin).await;

        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(cache))
                .configure(configure_user_routes),
        )
        .await;

        for (token, expected) in [(teacher, StatusCode::FORBIDDEN), (admin, StatusCode::OK)] {
            let req = actix_test::TestRequest::get()
                .uri("/api/v1/users")
                .insert_header(("Authorization", format!("Bearer {token}")))
                .to_request();
            let res = actix_test::call_service(&app, req).await;
            assert_eq!(res.status(), expected);
        }
    }
}
