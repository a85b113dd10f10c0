use super::{SeaOrmStorage, now_ts};
use crate::entity::absences::{ActiveModel, Column, Entity as Absences};
use crate::errors::{Result, db_err};
use crate::models::{
    PaginatedResponse,
    absences::{
        entities::Absence,
        requests::{
            AbsenceListParams, CreateAbsenceRequest, UpdateAbsenceRequest, check_single_subject,
        },
    },
};
use crate::storage::AbsenceStorage;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

#[async_trait::async_trait]
impl AbsenceStorage for SeaOrmStorage {
    async fn create_absence(
        &self,
        req: CreateAbsenceRequest,
        recorded_by: Option<i64>,
    ) -> Result<Absence> {
        check_single_subject(req.student_id, req.teacher_id)?;
        let now = now_ts();

        let model = ActiveModel {
            roster_id: Set(req.roster_id),
            student_id: Set(req.student_id),
            teacher_id: Set(req.teacher_id),
            date: Set(req.date),
            reason: Set(req.reason),
            excused: Set(req.excused),
            recorded_by: Set(recorded_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("create absence"))?;

        Ok(result.into_absence())
    }

    async fn get_absence_by_id(&self, id: i64) -> Result<Option<Absence>> {
        let result = Absences::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query absence"))?;

        Ok(result.map(|m| m.into_absence()))
    }

    async fn list_absences_with_pagination(
        &self,
        query: AbsenceListParams,
    ) -> Result<PaginatedResponse<Absence>> {
        let mut select = Absences::find();

        if let Some(roster_id) = query.roster_id {
            select = select.filter(Column::RosterId.eq(roster_id));
        }
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }
        // 日期区间，两端都包含
        if let Some(from) = query.from {
            select = select.filter(Column::Date.gte(from));
        }
        if let Some(to) = query.to {
            select = select.filter(Column::Date.lte(to));
        }

        select = select
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt);

        self.fetch_page(select, &query.pagination, |m| m.into_absence(), "list absences")
            .await
    }

    async fn update_absence(
        &self,
        id: i64,
        update: UpdateAbsenceRequest,
    ) -> Result<Option<Absence>> {
        let Some(existing) = self.get_absence_by_id(id).await? else {
            return Ok(None);
        };

        let student_id = update.student_id.unwrap_or(existing.student_id);
        let teacher_id = update.teacher_id.unwrap_or(existing.teacher_id);
        check_single_subject(student_id, teacher_id)?;

        let mut model = ActiveModel {
            id: Set(id),
            student_id: Set(student_id),
            teacher_id: Set(teacher_id),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        if let Some(roster_id) = update.roster_id {
            model.roster_id = Set(roster_id);
        }
        if let Some(date) = update.date {
            model.date = Set(date);
        }
        if let Some(reason) = update.reason {
            model.reason = Set(Some(reason));
        }
        if let Some(excused) = update.excused {
            model.excused = Set(excused);
        }

        model.update(&self.db).await.map_err(db_err("update absence"))?;

        self.get_absence_by_id(id).await
    }

    async fn delete_absence(&self, id: i64) -> Result<bool> {
        let result = Absences::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("delete absence"))?;

        Ok(result.rows_affected > 0)
    }
}
