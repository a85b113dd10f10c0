pub mod active;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::school_years::requests::{
    CreateSchoolYearRequest, SchoolYearListParams, UpdateSchoolYearRequest,
};
use crate::storage::Storage;

pub struct SchoolYearService {
    storage: Option<Arc<dyn Storage>>,
}

impl SchoolYearService {
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

    pub async fn list_school_years(
        &self,
        query: SchoolYearListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_school_years(self, query, request).await
    }

    pub async fn create_school_year(
        &self,
        school_year_data: CreateSchoolYearRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_school_year(self, school_year_data, request).await
    }

    pub async fn get_school_year(
        &self,
        school_year_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_school_year(self, school_year_id, request).await
    }

    pub async fn update_school_year(
        &self,
        school_year_id: i64,
        update_data: UpdateSchoolYearRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_school_year(self, school_year_id, update_data, request).await
    }

    pub async fn delete_school_year(
        &self,
        school_year_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_school_year(self, school_year_id, request).await
    }

    pub async fn get_active_school_year(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        active::get_active_school_year(self, request).await
    }
}
