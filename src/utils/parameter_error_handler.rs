//! 请求参数解析失败时统一返回 400 JSON

use actix_web::{
    Error, HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request<E>(err: E, kind: &str, req: &HttpRequest) -> Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let message = format!("Invalid {kind}: {err}");
    debug!("{} {}: {}", req.method(), req.path(), message);
    InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    bad_request(err, "JSON body", req)
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    bad_request(err, "query parameters", req)
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    bad_request(err, "path parameters", req)
}
