pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod summary;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::finance::requests::{
    CreateFinancialLogRequest, FinanceSummaryParams, FinancialLogListParams,
    UpdateFinancialLogRequest,
};
use crate::storage::Storage;

pub struct FinanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl FinanceService {
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

    pub async fn list_financial_logs(
        &self,
        query: FinancialLogListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_financial_logs(self, query, request).await
    }

    pub async fn create_financial_log(
        &self,
        financial_log_data: CreateFinancialLogRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_financial_log(self, financial_log_data, request).await
    }

    pub async fn get_financial_log(
        &self,
        financial_log_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_financial_log(self, financial_log_id, request).await
    }

    pub async fn update_financial_log(
        &self,
        financial_log_id: i64,
        update_data: UpdateFinancialLogRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_financial_log(self, financial_log_id, update_data, request).await
    }

    pub async fn delete_financial_log(
        &self,
        financial_log_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_financial_log(self, financial_log_id, request).await
    }

    pub async fn get_summary(
        &self,
        params: FinanceSummaryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        summary::get_summary(self, params, request).await
    }
}
