use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CurriculumService;
use crate::models::{
    ApiResponse, ErrorCode,
    curriculum::requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest},
};
use crate::services::{error_response, not_found};

pub async fn list_courses(
    service: &CurriculumService,
    query: CourseListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_courses_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(response, "Course list retrieved successfully"))),
        Err(e) => Ok(error_response("List courses", ErrorCode::CurriculumOperationFailed, e)),
    }
}

pub async fn create_course(
    service: &CurriculumService,
    mut course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = course_data.normalize() {
        return Ok(error_response("Create course", ErrorCode::CurriculumOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.create_course(course_data).await {
        Ok(course) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(course, "Course created successfully"))),
        Err(e) => Ok(error_response("Create course", ErrorCode::CurriculumOperationFailed, e)),
    }
}

pub async fn get_course(
    service: &CurriculumService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(course, "Course retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(error_response("Get course", ErrorCode::CurriculumOperationFailed, e)),
    }
}

pub async fn update_course(
    service: &CurriculumService,
    course_id: i64,
    mut update_data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.normalize() {
        return Ok(error_response("Update course", ErrorCode::CurriculumOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(course, "Course updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(error_response("Update course", ErrorCode::CurriculumOperationFailed, e)),
    }
}

pub async fn delete_course(
    service: &CurriculumService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_course(course_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Course deleted successfully"))),
        Ok(false) => Ok(not_found(ErrorCode::CourseNotFound, "Course not found")),
        Err(e) => Ok(error_response("Delete course", ErrorCode::CurriculumOperationFailed, e)),
    }
}
