use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CurriculumService;
use crate::models::{
    ApiResponse, ErrorCode,
    curriculum::requests::{ModuleListParams, CreateModuleRequest, UpdateModuleRequest},
};
use crate::services::{error_response, not_found};

pub async fn list_modules(
    service: &CurriculumService,
    query: ModuleListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_modules_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(response, "Module list retrieved successfully"))),
        Err(e) => Ok(error_response("List modules", ErrorCode::CurriculumOperationFailed, e)),
    }
}

pub async fn create_module(
    service: &CurriculumService,
    mut module_data: CreateModuleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = module_data.normalize() {
        return Ok(error_response("Create module", ErrorCode::CurriculumOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.create_module(module_data).await {
        Ok(module) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(module, "Module created successfully"))),
        Err(e) => Ok(error_response("Create module", ErrorCode::CurriculumOperationFailed, e)),
    }
}

pub async fn get_module(
    service: &CurriculumService,
    module_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_module_by_id(module_id).await {
        Ok(Some(module)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(module, "Module retrieved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::ModuleNotFound, "Module not found")),
        Err(e) => Ok(error_response("Get module", ErrorCode::CurriculumOperationFailed, e)),
    }
}

pub async fn update_module(
    service: &CurriculumService,
    module_id: i64,
    mut update_data: UpdateModuleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(e) = update_data.normalize() {
        return Ok(error_response("Update module", ErrorCode::CurriculumOperationFailed, e));
    }

    let storage = service.get_storage(request);

    match storage.update_module(module_id, update_data).await {
        Ok(Some(module)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(module, "Module updated successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::ModuleNotFound, "Module not found")),
        Err(e) => Ok(error_response("Update module", ErrorCode::CurriculumOperationFailed, e)),
    }
}

pub async fn delete_module(
    service: &CurriculumService,
    module_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_module(module_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Module deleted successfully"))),
        Ok(false) => Ok(not_found(ErrorCode::ModuleNotFound, "Module not found")),
        Err(e) => Ok(error_response("Delete module", ErrorCode::CurriculumOperationFailed, e)),
    }
}
