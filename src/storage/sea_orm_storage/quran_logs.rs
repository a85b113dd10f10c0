use super::{SeaOrmStorage, now_ts};
use crate::entity::quran_logs::{ActiveModel, Column, Entity as QuranLogs};
use crate::errors::{Result, db_err};
use crate::models::{
    PaginatedResponse,
    quran::entities::VerseKey,
    quran_logs::{
        entities::QuranLog,
        requests::{
            CreateQuranLogRequest, QuranLogListParams, UpdateQuranLogRequest, check_verse_range,
        },
    },
};
use crate::storage::QuranLogStorage;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

#[async_trait::async_trait]
impl QuranLogStorage for SeaOrmStorage {
    async fn create_quran_log(&self, req: CreateQuranLogRequest) -> Result<QuranLog> {
        req.validate()?;
        let now = now_ts();

        let model = ActiveModel {
            student_id: Set(req.student_id),
            teacher_id: Set(req.teacher_id),
            date: Set(req.date),
            kind: Set(req.kind.to_string()),
            start_surah: Set(req.start_surah),
            start_ayah: Set(req.start_ayah),
            end_surah: Set(req.end_surah),
            end_ayah: Set(req.end_ayah),
            notes: Set(req.notes),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("create quran log"))?;

        Ok(result.into_quran_log())
    }

    async fn get_quran_log_by_id(&self, id: i64) -> Result<Option<QuranLog>> {
        let result = QuranLogs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query quran log"))?;

        Ok(result.map(|m| m.into_quran_log()))
    }

    async fn list_quran_logs_with_pagination(
        &self,
        query: QuranLogListParams,
    ) -> Result<PaginatedResponse<QuranLog>> {
        let mut select = QuranLogs::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }
        if let Some(from) = query.from {
            select = select.filter(Column::Date.gte(from));
        }
        if let Some(to) = query.to {
            select = select.filter(Column::Date.lte(to));
        }

        select = select
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt);

        self.fetch_page(
            select,
            &query.pagination,
            |m| m.into_quran_log(),
            "list quran logs",
        )
        .await
    }

    async fn update_quran_log(
        &self,
        id: i64,
        update: UpdateQuranLogRequest,
    ) -> Result<Option<QuranLog>> {
        let Some(existing) = self.get_quran_log_by_id(id).await? else {
            return Ok(None);
        };

        // 与原记录合并后整体校验范围
        let start = VerseKey {
            surah: update.start_surah.unwrap_or(existing.start_surah),
            ayah: update.start_ayah.unwrap_or(existing.start_ayah),
        };
        let end = VerseKey {
            surah: update.end_surah.unwrap_or(existing.end_surah),
            ayah: update.end_ayah.unwrap_or(existing.end_ayah),
        };
        check_verse_range(start, end)?;

        let mut model = ActiveModel {
            id: Set(id),
            start_surah: Set(start.surah),
            start_ayah: Set(start.ayah),
            end_surah: Set(end.surah),
            end_ayah: Set(end.ayah),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }
        if let Some(date) = update.date {
            model.date = Set(date);
        }
        if let Some(kind) = update.kind {
            model.kind = Set(kind.to_string());
        }
        if let Some(notes) = update.notes {
            model.notes = Set(Some(notes));
        }

        model.update(&self.db).await.map_err(db_err("update quran log"))?;

        self.get_quran_log_by_id(id).await
    }

    async fn delete_quran_log(&self, id: i64) -> Result<bool> {
        let result = QuranLogs::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("delete quran log"))?;

        Ok(result.rows_affected > 0)
    }
}
