use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::school_years::requests::{
    CreateSchoolYearRequest, SchoolYearListParams, UpdateSchoolYearRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::SchoolYearService;
use crate::utils::SafeIDI64;

static SCHOOL_YEAR_SERVICE: Lazy<SchoolYearService> = Lazy::new(SchoolYearService::new_lazy);

pub async fn list_school_years(
    req: HttpRequest,
    query: web::Query<SchoolYearListParams>,
) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE
        .list_school_years(query.into_inner(), &req)
        .await
}

pub async fn create_school_year(
    req: HttpRequest,
    school_year_data: web::Json<CreateSchoolYearRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE
        .create_school_year(school_year_data.into_inner(), &req)
        .await
}

pub async fn get_school_year(
    req: HttpRequest,
    school_year_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE
        .get_school_year(school_year_id.0, &req)
        .await
}

pub async fn update_school_year(
    req: HttpRequest,
    school_year_id: SafeIDI64,
    update_data: web::Json<UpdateSchoolYearRequest>,
) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE
        .update_school_year(school_year_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_school_year(
    req: HttpRequest,
    school_year_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE
        .delete_school_year(school_year_id.0, &req)
        .await
}

pub async fn get_active_school_year(req: HttpRequest) -> ActixResult<HttpResponse> {
    SCHOOL_YEAR_SERVICE.get_active_school_year(&req).await
}

pub fn configure_school_years_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/school-years")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/active").route(web::get().to(get_active_school_year)))
            .service(
                web::resource("").route(web::get().to(list_school_years)).route(
                    web::post()
                        .to(create_school_year)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_school_year))
                    .route(
                        web::put()
                            .to(update_school_year)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_school_year)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
