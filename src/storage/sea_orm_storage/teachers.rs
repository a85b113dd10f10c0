//! 教师存储操作

use super::{SeaOrmStorage, now_ts, purge_rosters, search_term};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::entity::{absences, classes, quran_logs, rosters};
use crate::errors::{Result, db_err};
use crate::models::{
    PaginatedResponse,
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest},
    },
};
use crate::storage::TeacherStorage;
use crate::utils::sql::contains_any;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

#[async_trait::async_trait]
impl TeacherStorage for SeaOrmStorage {
    async fn create_teacher(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = now_ts();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            first_name: Set(req.first_name.trim().to_string()),
            last_name: Set(req.last_name.trim().to_string()),
            email: Set(req.email),
            phone: Set(req.phone),
            specialization: Set(req.specialization),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("create teacher"))?;

        Ok(result.into_teacher())
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query teacher"))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListParams,
    ) -> Result<PaginatedResponse<Teacher>> {
        let mut select = Teachers::find();

        if let Some(term) = search_term(&query.search) {
            select = select.filter(contains_any(
                &[
                    Column::FirstName,
                    Column::LastName,
                    Column::Email,
                    Column::Specialization,
                ],
                &term,
            ));
        }

        select = select
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName);

        self.fetch_page(select, &query.pagination, |m| m.into_teacher(), "list teachers")
            .await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        if self.get_teacher_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now_ts()),
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
        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(specialization) = update.specialization {
            model.specialization = Set(Some(specialization));
        }

        model.update(&self.db).await.map_err(db_err("update teacher"))?;

        self.get_teacher_by_id(id).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("delete teacher"))?;

        // 该教师的课及其缺勤记录
        purge_rosters(&txn, Condition::all().add(rosters::Column::TeacherId.eq(id)))
            .await
            .map_err(db_err("delete teacher rosters"))?;
        // 教师本人的缺勤记录
        absences::Entity::delete_many()
            .filter(absences::Column::TeacherId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("delete teacher absences"))?;
        // 撤销班主任
        classes::Entity::update_many()
            .col_expr(classes::Column::MentorId, Expr::value(Option::<i64>::None))
            .filter(classes::Column::MentorId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("clear class mentor"))?;
        // 背诵记录保留，仅清空指导教师
        quran_logs::Entity::update_many()
            .col_expr(quran_logs::Column::TeacherId, Expr::value(Option::<i64>::None))
            .filter(quran_logs::Column::TeacherId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("detach quran logs"))?;

        let result = Teachers::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err("delete teacher"))?;

        txn.commit().await.map_err(db_err("delete teacher"))?;
        Ok(result.rows_affected > 0)
    }
}
