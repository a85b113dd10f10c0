pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classrooms::requests::{
    ClassroomListParams, CreateClassroomRequest, UpdateClassroomRequest,
};
use crate::storage::Storage;

pub struct ClassroomService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassroomService {
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

    pub async fn list_classrooms(
        &self,
        query: ClassroomListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_classrooms(self, query, request).await
    }

    pub async fn create_classroom(
        &self,
        classroom_data: CreateClassroomRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_classroom(self, classroom_data, request).await
    }

    pub async fn get_classroom(
        &self,
        classroom_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_classroom(self, classroom_id, request).await
    }

    pub async fn update_classroom(
        &self,
        classroom_id: i64,
        update_data: UpdateClassroomRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_classroom(self, classroom_id, update_data, request).await
    }

    pub async fn delete_classroom(
        &self,
        classroom_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_classroom(self, classroom_id, request).await
    }
}
