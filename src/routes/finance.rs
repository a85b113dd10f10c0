use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::finance::requests::{
    CreateFinancialLogRequest, FinanceSummaryParams, FinancialLogListParams,
    UpdateFinancialLogRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::FinanceService;
use crate::utils::SafeIDI64;

static FINANCE_SERVICE: Lazy<FinanceService> = Lazy::new(FinanceService::new_lazy);

pub async fn list_financial_logs(
    req: HttpRequest,
    query: web::Query<FinancialLogListParams>,
) -> ActixResult<HttpResponse> {
    FINANCE_SERVICE
        .list_financial_logs(query.into_inner(), &req)
        .await
}

pub async fn create_financial_log(
    req: HttpRequest,
    financial_log_data: web::Json<CreateFinancialLogRequest>,
) -> ActixResult<HttpResponse> {
    FINANCE_SERVICE
        .create_financial_log(financial_log_data.into_inner(), &req)
        .await
}

pub async fn get_financial_log(
    req: HttpRequest,
    financial_log_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    FINANCE_SERVICE
        .get_financial_log(financial_log_id.0, &req)
        .await
}

pub async fn update_financial_log(
    req: HttpRequest,
    financial_log_id: SafeIDI64,
    update_data: web::Json<UpdateFinancialLogRequest>,
) -> ActixResult<HttpResponse> {
    FINANCE_SERVICE
        .update_financial_log(financial_log_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_financial_log(
    req: HttpRequest,
    financial_log_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    FINANCE_SERVICE
        .delete_financial_log(financial_log_id.0, &req)
        .await
}

pub async fn get_summary(
    req: HttpRequest,
    query: web::Query<FinanceSummaryParams>,
) -> ActixResult<HttpResponse> {
    FINANCE_SERVICE.get_summary(query.into_inner(), &req).await
}

pub fn configure_finance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/finance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("/summary", web::get().to(get_summary))
                    .route("", web::get().to(list_financial_logs))
                    .route("", web::post().to(create_financial_log))
                    .route("/{id}", web::get().to(get_financial_log))
                    .route("/{id}", web::put().to(update_financial_log))
                    .route("/{id}", web::delete().to(delete_financial_log)),
            ),
    );
}
