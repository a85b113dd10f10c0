use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::rosters::requests::{
    CreateRosterRequest, MoveRosterRequest, RosterCalendarParams, RosterListParams,
    UpdateRosterRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::RosterService;
use crate::utils::SafeIDI64;

static ROSTER_SERVICE: Lazy<RosterService> = Lazy::new(RosterService::new_lazy);

pub async fn list_rosters(
    req: HttpRequest,
    query: web::Query<RosterListParams>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE.list_rosters(query.into_inner(), &req).await
}

pub async fn create_roster(
    req: HttpRequest,
    roster_data: web::Json<CreateRosterRequest>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .create_roster(roster_data.into_inner(), &req)
        .await
}

pub async fn get_roster(req: HttpRequest, roster_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE.get_roster(roster_id.0, &req).await
}

pub async fn update_roster(
    req: HttpRequest,
    roster_id: SafeIDI64,
    update_data: web::Json<UpdateRosterRequest>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .update_roster(roster_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_roster(req: HttpRequest, roster_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE.delete_roster(roster_id.0, &req).await
}

pub async fn get_calendar(
    req: HttpRequest,
    query: web::Query<RosterCalendarParams>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE.get_calendar(query.into_inner(), &req).await
}

pub async fn move_roster(
    req: HttpRequest,
    roster_id: SafeIDI64,
    move_data: web::Json<MoveRosterRequest>,
) -> ActixResult<HttpResponse> {
    ROSTER_SERVICE
        .move_roster(roster_id.0, move_data.into_inner(), &req)
        .await
}

pub fn configure_rosters_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/rosters")
            .wrap(middlewares::RequireJWT)
            // 日历视图，需在 /{id} 之前注册
            .service(web::resource("/calendar").route(web::get().to(get_calendar)))
            .service(
                web::resource("").route(web::get().to(list_rosters)).route(
                    web::post()
                        .to(create_roster)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_roster))
                    .route(
                        web::put()
                            .to(update_roster)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_roster)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/calendar").route(
                    web::put()
                        .to(move_roster)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            ),
    );
}
