use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::quran_logs::requests::{
    CreateQuranLogRequest, QuranLogListParams, UpdateQuranLogRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::QuranLogService;
use crate::utils::SafeIDI64;

static QURAN_LOG_SERVICE: Lazy<QuranLogService> = Lazy::new(QuranLogService::new_lazy);

pub async fn list_quran_logs(
    req: HttpRequest,
    query: web::Query<QuranLogListParams>,
) -> ActixResult<HttpResponse> {
    QURAN_LOG_SERVICE
        .list_quran_logs(query.into_inner(), &req)
        .await
}

pub async fn create_quran_log(
    req: HttpRequest,
    quran_log_data: web::Json<CreateQuranLogRequest>,
) -> ActixResult<HttpResponse> {
    QURAN_LOG_SERVICE
        .create_quran_log(quran_log_data.into_inner(), &req)
        .await
}

pub async fn get_quran_log(req: HttpRequest, quran_log_id: SafeIDI64) -> ActixResult<HttpResponse> {
    QURAN_LOG_SERVICE.get_quran_log(quran_log_id.0, &req).await
}

pub async fn update_quran_log(
    req: HttpRequest,
    quran_log_id: SafeIDI64,
    update_data: web::Json<UpdateQuranLogRequest>,
) -> ActixResult<HttpResponse> {
    QURAN_LOG_SERVICE
        .update_quran_log(quran_log_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_quran_log(
    req: HttpRequest,
    quran_log_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    QURAN_LOG_SERVICE
        .delete_quran_log(quran_log_id.0, &req)
        .await
}

pub fn configure_quran_logs_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/quran-logs")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_quran_logs)).route(
                    web::post()
                        .to(create_quran_log)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_quran_log))
                    .route(
                        web::put()
                            .to(update_quran_log)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_quran_log)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
