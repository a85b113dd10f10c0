use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classrooms::requests::{
    ClassroomListParams, CreateClassroomRequest, UpdateClassroomRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ClassroomService;
use crate::utils::SafeIDI64;

static CLASSROOM_SERVICE: Lazy<ClassroomService> = Lazy::new(ClassroomService::new_lazy);

pub async fn list_classrooms(
    req: HttpRequest,
    query: web::Query<ClassroomListParams>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .list_classrooms(query.into_inner(), &req)
        .await
}

pub async fn create_classroom(
    req: HttpRequest,
    classroom_data: web::Json<CreateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .create_classroom(classroom_data.into_inner(), &req)
        .await
}

pub async fn get_classroom(req: HttpRequest, classroom_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.get_classroom(classroom_id.0, &req).await
}

pub async fn update_classroom(
    req: HttpRequest,
    classroom_id: SafeIDI64,
    update_data: web::Json<UpdateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .update_classroom(classroom_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_classroom(
    req: HttpRequest,
    classroom_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .delete_classroom(classroom_id.0, &req)
        .await
}

pub fn configure_classrooms_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classrooms")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_classrooms)).route(
                    web::post()
                        .to(create_classroom)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_classroom))
                    .route(
                        web::put()
                            .to(update_classroom)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_classroom)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
