pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::quran_logs::requests::{
    CreateQuranLogRequest, QuranLogListParams, UpdateQuranLogRequest,
};
use crate::storage::Storage;

pub struct QuranLogService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuranLogService {
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

    pub async fn list_quran_logs(
        &self,
        query: QuranLogListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_quran_logs(self, query, request).await
    }

    pub async fn create_quran_log(
        &self,
        quran_log_data: CreateQuranLogRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_quran_log(self, quran_log_data, request).await
    }

    pub async fn get_quran_log(
        &self,
        quran_log_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_quran_log(self, quran_log_id, request).await
    }

    pub async fn update_quran_log(
        &self,
        quran_log_id: i64,
        update_data: UpdateQuranLogRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_quran_log(self, quran_log_id, update_data, request).await
    }

    pub async fn delete_quran_log(
        &self,
        quran_log_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_quran_log(self, quran_log_id, request).await
    }
}
