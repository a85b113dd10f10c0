use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::curriculum::requests::{
    CourseListParams, CreateCourseRequest, CreateModuleRequest, CreateSubjectRequest,
    ModuleListParams, SubjectListParams, UpdateCourseRequest, UpdateModuleRequest,
    UpdateSubjectRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CurriculumService;
use crate::utils::SafeIDI64;

static CURRICULUM_SERVICE: Lazy<CurriculumService> = Lazy::new(CurriculumService::new_lazy);

pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .list_courses(query.into_inner(), &req)
        .await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn get_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE.get_course(course_id.0, &req).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeIDI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .update_course(course_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE.delete_course(course_id.0, &req).await
}

pub async fn list_modules(
    req: HttpRequest,
    query: web::Query<ModuleListParams>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .list_modules(query.into_inner(), &req)
        .await
}

pub async fn create_module(
    req: HttpRequest,
    module_data: web::Json<CreateModuleRequest>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .create_module(module_data.into_inner(), &req)
        .await
}

pub async fn get_module(req: HttpRequest, module_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE.get_module(module_id.0, &req).await
}

pub async fn update_module(
    req: HttpRequest,
    module_id: SafeIDI64,
    update_data: web::Json<UpdateModuleRequest>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .update_module(module_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_module(req: HttpRequest, module_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE.delete_module(module_id.0, &req).await
}

pub async fn list_subjects(
    req: HttpRequest,
    query: web::Query<SubjectListParams>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .list_subjects(query.into_inner(), &req)
        .await
}

pub async fn create_subject(
    req: HttpRequest,
    subject_data: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .create_subject(subject_data.into_inner(), &req)
        .await
}

pub async fn get_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE.get_subject(subject_id.0, &req).await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: SafeIDI64,
    update_data: web::Json<UpdateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE
        .update_subject(subject_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    CURRICULUM_SERVICE.delete_subject(subject_id.0, &req).await
}

fn admin_only() -> middlewares::RequireRole {
    middlewares::RequireRole::new_any(UserRole::admin_roles())
}

// 课程、模块、科目各自一个 scope，读取对所有登录用户开放
pub fn configure_curriculum_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_courses))
                    .route(web::post().to(create_course).wrap(admin_only())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_course))
                    .route(web::put().to(update_course).wrap(admin_only()))
                    .route(web::delete().to(delete_course).wrap(admin_only())),
            ),
    );
    cfg.service(
        web::scope("/api/v1/modules")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_modules))
                    .route(web::post().to(create_module).wrap(admin_only())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_module))
                    .route(web::put().to(update_module).wrap(admin_only()))
                    .route(web::delete().to(delete_module).wrap(admin_only())),
            ),
    );
    cfg.service(
        web::scope("/api/v1/subjects")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_subjects))
                    .route(web::post().to(create_subject).wrap(admin_only())),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_subject))
                    .route(web::put().to(update_subject).wrap(admin_only()))
                    .route(web::delete().to(delete_subject).wrap(admin_only())),
            ),
    );
}
