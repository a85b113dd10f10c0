pub mod bulk;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::results::requests::{
    BulkResultRequest, CreateResultRequest, ResultListParams, UpdateResultRequest,
};
use crate::storage::Storage;

pub struct ResultService {
    storage: Option<Arc<dyn Storage>>,
}

impl ResultService {
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

    pub async fn list_results(
        &self,
        query: ResultListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_results(self, query, request).await
    }

    pub async fn create_result(
        &self,
        result_data: CreateResultRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_result(self, result_data, request).await
    }

    pub async fn get_result(
        &self,
        result_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_result(self, result_id, request).await
    }

    pub async fn update_result(
        &self,
        result_id: i64,
        update_data: UpdateResultRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_result(self, result_id, update_data, request).await
    }

    pub async fn delete_result(
        &self,
        result_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_result(self, result_id, request).await
    }

    pub async fn save_bulk(
        &self,
        bulk: BulkResultRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        bulk::save_bulk(self, bulk, request).await
    }
}
