use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::results::requests::{
    BulkResultRequest, CreateResultRequest, ResultListParams, UpdateResultRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ResultService;
use crate::utils::SafeIDI64;

static RESULT_SERVICE: Lazy<ResultService> = Lazy::new(ResultService::new_lazy);

pub async fn list_results(
    req: HttpRequest,
    query: web::Query<ResultListParams>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.list_results(query.into_inner(), &req).await
}

pub async fn create_result(
    req: HttpRequest,
    result_data: web::Json<CreateResultRequest>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .create_result(result_data.into_inner(), &req)
        .await
}

pub async fn get_result(req: HttpRequest, result_id: SafeIDI64) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.get_result(result_id.0, &req).await
}

pub async fn update_result(
    req: HttpRequest,
    result_id: SafeIDI64,
    update_data: web::Json<UpdateResultRequest>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .update_result(result_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_result(req: HttpRequest, result_id: SafeIDI64) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.delete_result(result_id.0, &req).await
}

pub async fn save_bulk(
    req: HttpRequest,
    bulk: web::Json<BulkResultRequest>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.save_bulk(bulk.into_inner(), &req).await
}

pub fn configure_results_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/results")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/bulk").route(
                    web::post()
                        .to(save_bulk)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("").route(web::get().to(list_results)).route(
                    web::post()
                        .to(create_result)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_result))
                    .route(
                        web::put()
                            .to(update_result)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_result)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
