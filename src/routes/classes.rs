use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classes::requests::{ClassListParams, CreateClassRequest, UpdateClassRequest};
use crate::models::users::entities::UserRole;
use crate::services::ClassService;
use crate::utils::SafeIDI64;

static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<ClassListParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(query.into_inner(), &req).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(class_data.into_inner(), &req)
        .await
}

pub async fn get_class(req: HttpRequest, class_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(class_id.0, &req).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeIDI64,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(class_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_class(req: HttpRequest, class_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(class_id.0, &req).await
}

pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_classes)).route(
                    web::post()
                        .to(create_class)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_class))
                    .route(
                        web::put()
                            .to(update_class)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_class)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
