use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assessments::requests::{
    AssessmentListParams, CreateAssessmentRequest, UpdateAssessmentRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::AssessmentService;
use crate::utils::SafeIDI64;

static ASSESSMENT_SERVICE: Lazy<AssessmentService> = Lazy::new(AssessmentService::new_lazy);

pub async fn list_assessments(
    req: HttpRequest,
    query: web::Query<AssessmentListParams>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .list_assessments(query.into_inner(), &req)
        .await
}

pub async fn create_assessment(
    req: HttpRequest,
    assessment_data: web::Json<CreateAssessmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .create_assessment(assessment_data.into_inner(), &req)
        .await
}

pub async fn get_assessment(
    req: HttpRequest,
    assessment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .get_assessment(assessment_id.0, &req)
        .await
}

pub async fn update_assessment(
    req: HttpRequest,
    assessment_id: SafeIDI64,
    update_data: web::Json<UpdateAssessmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .update_assessment(assessment_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_assessment(
    req: HttpRequest,
    assessment_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    ASSESSMENT_SERVICE
        .delete_assessment(assessment_id.0, &req)
        .await
}

pub fn configure_assessments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assessments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(web::get().to(list_assessments)).route(
                    web::post()
                        .to(create_assessment)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_assessment))
                    .route(
                        web::put()
                            .to(update_assessment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_assessment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
