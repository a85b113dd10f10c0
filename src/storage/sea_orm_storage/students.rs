//! 学生存储操作

use super::{SeaOrmStorage, now_ts, search_term};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::entity::{absences, financial_logs, quran_logs, results};
use crate::errors::{Result, db_err};
use crate::models::{
    PaginatedResponse,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
    },
};
use crate::storage::StudentStorage;
use crate::utils::sql::contains_any;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

#[async_trait::async_trait]
impl StudentStorage for SeaOrmStorage {
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = now_ts();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            first_name: Set(req.first_name.trim().to_string()),
            last_name: Set(req.last_name.trim().to_string()),
            birth_date: Set(req.birth_date),
            gender: Set(req.gender),
            guardian_name: Set(req.guardian_name),
            guardian_phone: Set(req.guardian_phone),
            class_id: Set(req.class_id),
            enrolled_at: Set(req.class_id.map(|_| now)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("create student"))?;

        Ok(result.into_student())
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query student"))?;

        Ok(result.map(|m| m.into_student()))
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListParams,
    ) -> Result<PaginatedResponse<Student>> {
        let mut select = Students::find();

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        if let Some(term) = search_term(&query.search) {
            select = select.filter(contains_any(
                &[Column::FirstName, Column::LastName, Column::GuardianName],
                &term,
            ));
        }

        select = select
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName);

        self.fetch_page(select, &query.pagination, |m| m.into_student(), "list students")
            .await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let Some(existing) = self.get_student_by_id(id).await? else {
            return Ok(None);
        };

        let now = now_ts();
        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(user_id) = update.user_id {
            model.user_id = Set(user_id);
        }
        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name.trim().to_string());
        }
        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name.trim().to_string());
        }
        if let Some(birth_date) = update.birth_date {
            model.birth_date = Set(Some(birth_date));
        }
        if let Some(gender) = update.gender {
            model.gender = Set(Some(gender));
        }
        if let Some(guardian_name) = update.guardian_name {
            model.guardian_name = Set(Some(guardian_name));
        }
        if let Some(guardian_phone) = update.guardian_phone {
            model.guardian_phone = Set(Some(guardian_phone));
        }
        if let Some(class_id) = update.class_id
            && class_id != existing.class_id
        {
            model.class_id = Set(class_id);
            model.enrolled_at = Set(class_id.map(|_| now));
        }

        model.update(&self.db).await.map_err(db_err("update student"))?;

        self.get_student_by_id(id).await
    }

    async fn set_student_enrollment(
        &self,
        id: i64,
        class_id: Option<i64>,
    ) -> Result<Option<Student>> {
        let now = now_ts();
        let result = Students::update_many()
            .col_expr(Column::ClassId, Expr::value(class_id))
            .col_expr(Column::EnrolledAt, Expr::value(class_id.map(|_| now)))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err("update enrollment"))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.get_student_by_id(id).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("delete student"))?;

        results::Entity::delete_many()
            .filter(results::Column::StudentId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("delete student results"))?;
        absences::Entity::delete_many()
            .filter(absences::Column::StudentId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("delete student absences"))?;
        quran_logs::Entity::delete_many()
            .filter(quran_logs::Column::StudentId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("delete student quran logs"))?;
        // 财务流水需要留档
        financial_logs::Entity::update_many()
            .col_expr(
                financial_logs::Column::StudentId,
                Expr::value(Option::<i64>::None),
            )
            .filter(financial_logs::Column::StudentId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("detach financial logs"))?;

        let result = Students::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err("delete student"))?;

        txn.commit().await.map_err(db_err("delete student"))?;
        Ok(result.rows_affected > 0)
    }
}
