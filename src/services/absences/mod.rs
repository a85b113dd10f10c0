pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    ApiResponse, ErrorCode,
    absences::requests::{AbsenceListParams, CreateAbsenceRequest, UpdateAbsenceRequest},
};
use crate::storage::Storage;

pub struct AbsenceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AbsenceService {
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

    pub async fn list_absences(
        &self,
        query: AbsenceListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_absences(self, query, request).await
    }

    pub async fn create_absence(
        &self,
        absence_data: CreateAbsenceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_absence(self, absence_data, request).await
    }

    pub async fn get_absence(
        &self,
        absence_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_absence(self, absence_id, request).await
    }

    pub async fn update_absence(
        &self,
        absence_id: i64,
        update_data: UpdateAbsenceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_absence(self, absence_id, update_data, request).await
    }

    pub async fn delete_absence(
        &self,
        absence_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_absence(self, absence_id, request).await
    }
}

pub(crate) fn teacher_absence_denied() -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::AbsencePermissionDenied,
        "Only administrators can manage teacher absences",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{HttpMessage, http::StatusCode, test::TestRequest, web};
    use chrono::Utc;
    use serde::de::DeserializeOwned;
    use serde_json::{Value, json};

    use crate::models::users::entities::{User, UserRole, UserStatus};
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    fn request_as(storage: &Arc<dyn Storage>, role: UserRole) -> HttpRequest {
        let req = TestRequest::default()
            .app_data(web::Data::new(storage.clone()))
            .to_http_request();
        req.extensions_mut().insert(User {
            id: 5,
            username: "recorder".to_string(),
            email: "recorder@school.org".to_string(),
            password_hash: String::new(),
            role,
            status: UserStatus::Active,
            display_name: None,
            last_login: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        req
    }

    fn body<T: DeserializeOwned>(value: Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    // 返回 (roster_id, teacher_id, student_id)
    async fn seed(storage: &Arc<dyn Storage>) -> (i64, i64, i64) {
        let teacher = storage
            .create_teacher(body(json!({"first_name": "Amina", "last_name": "Haddad"})))
            .await
            .unwrap();
        let class = storage
            .create_class(body(json!({"name": "2B"})))
            .await
            .unwrap();
        let subject = storage
            .create_subject(body(json!({"name": "Fiqh"})))
            .await
            .unwrap();
        let classroom = storage
            .create_classroom(body(json!({"name": "Room 4"})))
            .await
            .unwrap();
        let student = storage
            .create_student(body(json!({"first_name": "Maryam", "last_name": "Saleh"})))
            .await
            .unwrap();
        let roster = storage
            .create_roster(body(json!({
                "class_id": class.id,
                "subject_id": subject.id,
                "teacher_id": teacher.id,
                "classroom_id": classroom.id,
                "day_of_week": "Monday",
                "start_time": "08:00",
                "end_time": "09:00"
            })))
            .await
            .unwrap();
        (roster.id, teacher.id, student.id)
    }

    #[actix_web::test]
    async fn test_teacher_absence_requires_admin() {
        let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::in_memory().await);
        let (roster_id, teacher_id, student_id) = seed(&storage).await;
        let service = AbsenceService::new_lazy();

        let teacher_absence = || -> CreateAbsenceRequest {
            body(json!({
                "roster_id": roster_id,
                "teacher_id": teacher_id,
                "date": "2024-09-02"
            }))
        };

        let as_teacher = request_as(&storage, UserRole::Teacher);
        let resp = service
            .create_absence(teacher_absence(), &as_teacher)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let as_admin = request_as(&storage, UserRole::Admin);
        let resp = service
            .create_absence(teacher_absence(), &as_admin)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created = storage
            .list_absences_with_pagination(AbsenceListParams::default())
            .await
            .unwrap()
            .items;
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].recorded_by, Some(5));
        let absence_id = created[0].id;

        let resp = service.delete_absence(absence_id, &as_teacher).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        // 学生缺勤不能被教师改成教师缺勤
        let student_absence: CreateAbsenceRequest = body(json!({
            "roster_id": roster_id,
            "student_id": student_id,
            "date": "2024-09-02"
        }));
        let resp = service
            .create_absence(student_absence, &as_teacher)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let switch: UpdateAbsenceRequest =
            body(json!({"student_id": null, "teacher_id": teacher_id}));
        let student_absence_id = storage
            .list_absences_with_pagination(AbsenceListParams {
                student_id: Some(student_id),
                ..Default::default()
            })
            .await
            .unwrap()
            .items[0]
            .id;
        let resp = service
            .update_absence(student_absence_id, switch, &as_teacher)
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = service.delete_absence(absence_id, &as_admin).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
