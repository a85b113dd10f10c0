use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::DashboardService;
use crate::models::{
    ApiResponse, AppStartTime, ErrorCode, dashboard::responses::DashboardSummary,
    finance::requests::FinanceSummaryParams,
};
use crate::services::error_response;

/// 启动至今的秒数；未注入启动时间时为 0
fn uptime_seconds(request: &HttpRequest) -> i64 {
    request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| (chrono::Utc::now() - start.start_datetime).num_seconds().max(0))
        .unwrap_or(0)
}

pub async fn get_summary(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let counts = match storage.entity_counts().await {
        Ok(counts) => counts,
        Err(e) => return Ok(error_response("Dashboard", ErrorCode::InternalServerError, e)),
    };
    let active_school_year = match storage.get_active_school_year().await {
        Ok(year) => year,
        Err(e) => return Ok(error_response("Dashboard", ErrorCode::InternalServerError, e)),
    };
    // 全部时间范围的收支
    let finance = match storage.finance_summary(FinanceSummaryParams::default()).await {
        Ok(summary) => summary,
        Err(e) => return Ok(error_response("Dashboard", ErrorCode::InternalServerError, e)),
    };

    let summary = DashboardSummary {
        counts,
        active_school_year,
        finance,
        uptime_seconds: uptime_seconds(request),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        summary,
        "Dashboard summary retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_uptime_without_start_time() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(uptime_seconds(&req), 0);
    }

    #[test]
    fn test_uptime_counts_from_start() {
        let start = AppStartTime {
            start_datetime: chrono::Utc::now() - chrono::TimeDelta::seconds(90),
        };
        let req = TestRequest::default()
            .app_data(web::Data::new(start))
            .to_http_request();
        let uptime = uptime_seconds(&req);
        assert!((90..=91).contains(&uptime));
    }
}
