use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CurriculumService;
use crate::models::{
    ApiResponse, ErrorCode,
    curriculum::requests::{SubjectListParams, CreateSubjectRequest, UpdateSubjectRequest},
};
use crate::services::{error_response, not_found};

pub async fn list_subjects(
    service: &CurriculumService,
    query: SubjectListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subjects_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(response, "Subject list retrieved successfully"))),
        Err(e) => Ok(error_response("List subjects", ErrorCode::CurriculumOperationFailed, e)),
    }
}

pub async fn create_subject(
    service: &CurriculumService,
    mut subject_data: CreateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = subject_data.normalize() {
        return Ok(error_response("Create subject", ErrorCode::CurriculumOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.create_subject(subject_data).await {
        Ok(subject) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(subject, "Subject created successfully"))),
        Err(e) => Ok(error_response("Create subject", ErrorCode::CurriculumOperationFailed, e)),
    }
}

pub async fn get_subject(
    service: &CurriculumService,
    subject_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(subject, "Subject retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Ok(error_response("Get subject", ErrorCode::CurriculumOperationFailed, e)),
    }
}

pub async fn update_subject(
    service: &CurriculumService,
    subject_id: i64,
    mut update_data: UpdateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.normalize() {
        return Ok(error_response("Update subject", ErrorCode::CurriculumOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.update_subject(subject_id, update_data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(subject, "Subject updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Ok(error_response("Update subject", ErrorCode::CurriculumOperationFailed, e)),
    }
}

pub async fn delete_subject(
    service: &CurriculumService,
    subject_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_subject(subject_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Subject deleted successfully"))),
        Ok(false) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Ok(error_response("Delete subject", ErrorCode::CurriculumOperationFailed, e)),
    }
}
