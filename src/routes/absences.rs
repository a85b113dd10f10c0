use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::absences::requests::{
    AbsenceListParams, CreateAbsenceRequest, UpdateAbsenceRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AbsenceService;
use crate::utils::SafeIDI64;

static ABSENCE_SERVICE: Lazy<AbsenceService> = Lazy::new(AbsenceService::new_lazy);

pub async fn list_absences(
    req: HttpRequest,
    query: web::Query<AbsenceListParams>,
) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE
        .list_absences(query.into_inner(), &req)
        .await
}

pub async fn create_absence(
    req: HttpRequest,
    absence_data: web::Json<CreateAbsenceRequest>,
) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE
        .create_absence(absence_data.into_inner(), &req)
        .await
}

pub async fn get_absence(req: HttpRequest, absence_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE.get_absence(absence_id.0, &req).await
}

pub async fn update_absence(
    req: HttpRequest,
    absence_id: SafeIDI64,
    update_data: web::Json<UpdateAbsenceRequest>,
) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE
        .update_absence(absence_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_absence(req: HttpRequest, absence_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ABSENCE_SERVICE.delete_absence(absence_id.0, &req).await
}

pub fn configure_absences_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/absences")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_absences)).route(
                    web::post()
                        .to(create_absence)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_absence))
                    .route(
                        web::put()
                            .to(update_absence)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_absence)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
