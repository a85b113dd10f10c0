//! 课程体系：课程 -> 模块 -> 科目

pub mod courses;
pub mod modules;
pub mod subjects;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::curriculum::requests::{
    CourseListParams, CreateCourseRequest, CreateModuleRequest, CreateSubjectRequest,
    ModuleListParams, SubjectListParams, UpdateCourseRequest, UpdateModuleRequest,
    UpdateSubjectRequest,
};
use crate::storage::Storage;

pub struct CurriculumService {
    storage: Option<Arc<dyn Storage>>,
}

impl CurriculumService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_courses(
        &self,
        query: CourseListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::list_courses(self, query, request).await
    }

    pub async fn create_course(
        &self,
        course_data: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::create_course(self, course_data, request).await
    }

    pub async fn get_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::get_course(self, course_id, request).await
    }

    pub async fn update_course(
        &self,
        course_id: i64,
        update_data: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::update_course(self, course_id, update_data, request).await
    }

    pub async fn delete_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::delete_course(self, course_id, request).await
    }

    pub async fn list_modules(
        &self,
        query: ModuleListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::list_modules(self, query, request).await
    }

    pub async fn create_module(
        &self,
        module_data: CreateModuleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::create_module(self, module_data, request).await
    }

    pub async fn get_module(
        &self,
        module_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::get_module(self, module_id, request).await
    }

    pub async fn update_module(
        &self,
        module_id: i64,
        update_data: UpdateModuleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::update_module(self, module_id, update_data, request).await
    }

    pub async fn delete_module(
        &self,
        module_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::delete_module(self, module_id, request).await
    }

    pub async fn list_subjects(
        &self,
        query: SubjectListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::list_subjects(self, query, request).await
    }

    pub async fn create_subject(
        &self,
        subject_data: CreateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::create_subject(self, subject_data, request).await
    }

    pub async fn get_subject(
        &self,
        subject_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::get_subject(self, subject_id, request).await
    }

    pub async fn update_subject(
        &self,
        subject_id: i64,
        update_data: UpdateSubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::update_subject(self, subject_id, update_data, request).await
    }

    pub async fn delete_subject(
        &self,
        subject_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::delete_subject(self, subject_id, request).await
    }
}
