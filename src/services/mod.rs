//! 业务逻辑层
//!
//! 每类资源一个 `XxxService`，路由层通过懒加载的静态实例调用；
//! 存储实例从 actix 的 app data 中取得。

pub mod absences;
pub mod assessments;
pub mod auth;
pub mod classes;
pub mod classrooms;
pub mod curriculum;
pub mod dashboard;
pub mod finance;
pub mod quran;
pub mod quran_logs;
pub mod results;
pub mod rosters;
pub mod school_years;
pub mod students;
pub mod teachers;
pub mod users;

use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use tracing::error;

use crate::cache::{ObjectCache, user_cache_key};
use crate::errors::SchoolAdminError;
use crate::models::{ApiResponse, ErrorCode};

pub use absences::AbsenceService;
pub use assessments::AssessmentService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use classrooms::ClassroomService;
pub use curriculum::CurriculumService;
pub use dashboard::DashboardService;
pub use finance::FinanceService;
pub use quran::QuranService;
pub use quran_logs::QuranLogService;
pub use results::ResultService;
pub use rosters::RosterService;
pub use school_years::SchoolYearService;
pub use students::StudentService;
pub use teachers::TeacherService;
pub use users::UserService;

/// 把领域错误转换为 HTTP 响应
///
/// - `Validation` / `DateParse` -> 400
/// - `Conflict` -> 400 "already exists"
/// - `NotFound` -> 404（例如更新时引用的记录已被删除）
/// - `Authorization` -> 403，`Authentication` -> 401
/// - 其他 -> 500，详细信息只写日志
pub(crate) fn error_response(
    context: &str,
    failed: ErrorCode,
    err: SchoolAdminError,
) -> HttpResponse {
    match err {
        SchoolAdminError::Validation(msg) | SchoolAdminError::DateParse(msg) => {
            HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg))
        }
        SchoolAdminError::Conflict(msg) => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::AlreadyExists, msg))
        }
        SchoolAdminError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(ErrorCode::NotFound, msg))
        }
        SchoolAdminError::Authorization(msg) => {
            HttpResponse::Forbidden().json(ApiResponse::error_empty(ErrorCode::Forbidden, msg))
        }
        SchoolAdminError::Authentication(msg) => {
            HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, msg))
        }
        other => {
            error!("{} failed: {}", context, other);
            HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(failed, format!("{context} failed")))
        }
    }
}

/// 用户被修改或删除后清掉认证缓存，下一次请求重新读取账号状态
pub(crate) async fn evict_cached_user(request: &HttpRequest, user_id: i64) {
    if let Some(cache) = request.app_data::<web::Data<Arc<dyn ObjectCache>>>() {
        cache.remove(&user_cache_key(user_id)).await;
    }
}

pub(crate) fn not_found(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_duplicate_name_is_bad_request() {
        let resp = error_response(
            "Create course",
            ErrorCode::CurriculumOperationFailed,
            SchoolAdminError::conflict("create course: already exists"),
        );
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["code"], ErrorCode::AlreadyExists as i32);
        assert!(json["message"].as_str().unwrap().contains("already exists"));
    }

    #[actix_web::test]
    async fn test_internal_error_hides_details() {
        let resp = error_response(
            "List rosters",
            ErrorCode::RosterOperationFailed,
            SchoolAdminError::database_operation("connection reset by peer"),
        );
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert_eq!(json["code"], ErrorCode::RosterOperationFailed as i32);
        assert_eq!(json["message"], "List rosters failed");
    }

    #[actix_web::test]
    async fn test_forbidden_and_validation() {
        let resp = error_response(
            "x",
            ErrorCode::AbsenceOperationFailed,
            SchoolAdminError::authorization("admins only"),
        );
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = error_response(
            "x",
            ErrorCode::RosterOperationFailed,
            SchoolAdminError::validation("start_time must be before end_time"),
        );
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["code"], ErrorCode::ValidationFailed as i32);
    }
}
