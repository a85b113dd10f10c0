//! 排课存储操作

use super::{SeaOrmStorage, now_ts};
use crate::calendar::{WeeklySlot, normalize_day_of_week, validate_time_range};
use crate::entity::absences;
use crate::entity::rosters::{ActiveModel, Column, Entity as Rosters};
use crate::errors::{Result, db_err};
use crate::models::{
    PaginatedResponse,
    rosters::{
        entities::Roster,
        requests::{CreateRosterRequest, RosterFilters, RosterListParams, UpdateRosterRequest},
    },
};
use crate::storage::RosterStorage;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select, Set,
    TransactionTrait,
};

/// 把筛选条件应用到查询上；星期统一成英文名再比较
fn apply_filters(mut select: Select<Rosters>, filters: &RosterFilters) -> Result<Select<Rosters>> {
    if let Some(class_id) = filters.class_id {
        select = select.filter(Column::ClassId.eq(class_id));
    }
    if let Some(subject_id) = filters.subject_id {
        select = select.filter(Column::SubjectId.eq(subject_id));
    }
    if let Some(teacher_id) = filters.teacher_id {
        select = select.filter(Column::TeacherId.eq(teacher_id));
    }
    if let Some(classroom_id) = filters.classroom_id {
        select = select.filter(Column::ClassroomId.eq(classroom_id));
    }
    if let Some(day) = &filters.day_of_week {
        select = select.filter(Column::DayOfWeek.eq(normalize_day_of_week(day)?));
    }

    Ok(select
        .order_by_asc(Column::StartTime)
        .order_by_asc(Column::Id))
}

#[async_trait::async_trait]
impl RosterStorage for SeaOrmStorage {
    async fn create_roster(&self, req: CreateRosterRequest) -> Result<Roster> {
        let now = now_ts();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            subject_id: Set(req.subject_id),
            teacher_id: Set(req.teacher_id),
            classroom_id: Set(req.classroom_id),
            day_of_week: Set(req.day_of_week),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("create roster"))?;

        Ok(result.into_roster())
    }

    async fn get_roster_by_id(&self, id: i64) -> Result<Option<Roster>> {
        let result = Rosters::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query roster"))?;

        Ok(result.map(|m| m.into_roster()))
    }

    async fn list_rosters_with_pagination(
        &self,
        query: RosterListParams,
    ) -> Result<PaginatedResponse<Roster>> {
        let select = apply_filters(Rosters::find(), &query.filters)?;

        self.fetch_page(select, &query.pagination, |m| m.into_roster(), "list rosters")
            .await
    }

    async fn list_rosters(&self, filters: RosterFilters) -> Result<Vec<Roster>> {
        let models = apply_filters(Rosters::find(), &filters)?
            .all(&self.db)
            .await
            .map_err(db_err("list rosters"))?;

        Ok(models.into_iter().map(|m| m.into_roster()).collect())
    }

    async fn update_roster(&self, id: i64, update: UpdateRosterRequest) -> Result<Option<Roster>> {
        let Some(existing) = self.get_roster_by_id(id).await? else {
            return Ok(None);
        };

        // 合并后的时间段必须仍然有效
        let (start_time, end_time) = validate_time_range(
            update.start_time.as_deref().unwrap_or(&existing.start_time),
            update.end_time.as_deref().unwrap_or(&existing.end_time),
        )?;

        let mut model = ActiveModel {
            id: Set(id),
            start_time: Set(start_time),
            end_time: Set(end_time),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        if let Some(class_id) = update.class_id {
            model.class_id = Set(class_id);
        }
        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }
        if let Some(classroom_id) = update.classroom_id {
            model.classroom_id = Set(classroom_id);
        }
        if let Some(day) = update.day_of_week {
            model.day_of_week = Set(Some(normalize_day_of_week(&day)?));
        }

        model.update(&self.db).await.map_err(db_err("update roster"))?;

        self.get_roster_by_id(id).await
    }

    async fn move_roster(&self, id: i64, slot: WeeklySlot) -> Result<Option<Roster>> {
        if self.get_roster_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let (start_time, end_time) = validate_time_range(&slot.start_time, &slot.end_time)?;
        let model = ActiveModel {
            id: Set(id),
            day_of_week: Set(Some(normalize_day_of_week(&slot.day_of_week)?)),
            start_time: Set(start_time),
            end_time: Set(end_time),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        model.update(&self.db).await.map_err(db_err("move roster"))?;

        self.get_roster_by_id(id).await
    }

    async fn delete_roster(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("delete roster"))?;

        absences::Entity::delete_many()
            .filter(absences::Column::RosterId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("delete roster absences"))?;

        let result = Rosters::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err("delete roster"))?;

        txn.commit().await.map_err(db_err("delete roster"))?;
        Ok(result.rows_affected > 0)
    }
}
