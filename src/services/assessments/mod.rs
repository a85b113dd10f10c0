pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assessments::requests::{
    AssessmentListParams, CreateAssessmentRequest, UpdateAssessmentRequest,
};
use crate::storage::Storage;

pub struct AssessmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssessmentService {
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

    pub async fn list_assessments(
        &self,
        query: AssessmentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_assessments(self, query, request).await
    }

    pub async fn create_assessment(
        &self,
        assessment_data: CreateAssessmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assessment(self, assessment_data, request).await
    }

    pub async fn get_assessment(
        &self,
        assessment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_assessment(self, assessment_id, request).await
    }

    pub async fn update_assessment(
        &self,
        assessment_id: i64,
        update_data: UpdateAssessmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_assessment(self, assessment_id, update_data, request).await
    }

    pub async fn delete_assessment(
        &self,
        assessment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assessment(self, assessment_id, request).await
    }
}
