//! 学年存储操作
//!
//! 同一时间只有一个学年处于激活状态，切换在事务内完成。

use super::{SeaOrmStorage, now_ts};
use crate::entity::classes;
use crate::entity::school_years::{ActiveModel, Column, Entity as SchoolYears};
use crate::errors::{Result, db_err};
use crate::models::{
    PaginatedResponse,
    school_years::{
        entities::SchoolYear,
        requests::{
            CreateSchoolYearRequest, SchoolYearListParams, UpdateSchoolYearRequest,
            check_date_order,
        },
    },
};
use crate::storage::SchoolYearStorage;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// 取消其它学年的激活状态
async fn deactivate_others<C: ConnectionTrait>(
    conn: &C,
    keep: Option<i64>,
) -> std::result::Result<(), sea_orm::DbErr> {
    let mut update = SchoolYears::update_many()
        .col_expr(Column::IsActive, Expr::value(false))
        .filter(Column::IsActive.eq(true));
    if let Some(id) = keep {
        update = update.filter(Column::Id.ne(id));
    }
    update.exec(conn).await?;
    Ok(())
}

#[async_trait::async_trait]
impl SchoolYearStorage for SeaOrmStorage {
    async fn create_school_year(&self, req: CreateSchoolYearRequest) -> Result<SchoolYear> {
        check_date_order(req.start_date, req.end_date)?;

        let now = now_ts();
        let txn = self.db.begin().await.map_err(db_err("create school year"))?;

        if req.is_active {
            deactivate_others(&txn, None)
                .await
                .map_err(db_err("deactivate school years"))?;
        }

        let model = ActiveModel {
            name: Set(req.name),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            is_active: Set(req.is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&txn).await.map_err(db_err("create school year"))?;

        txn.commit().await.map_err(db_err("create school year"))?;
        Ok(result.into_school_year())
    }

    async fn get_school_year_by_id(&self, id: i64) -> Result<Option<SchoolYear>> {
        let result = SchoolYears::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query school year"))?;

        Ok(result.map(|m| m.into_school_year()))
    }

    async fn get_active_school_year(&self) -> Result<Option<SchoolYear>> {
        let result = SchoolYears::find()
            .filter(Column::IsActive.eq(true))
            .order_by_desc(Column::UpdatedAt)
            .one(&self.db)
            .await
            .map_err(db_err("query active school year"))?;

        Ok(result.map(|m| m.into_school_year()))
    }

    async fn list_school_years_with_pagination(
        &self,
        query: SchoolYearListParams,
    ) -> Result<PaginatedResponse<SchoolYear>> {
        let select = SchoolYears::find().order_by_desc(Column::StartDate);

        self.fetch_page(
            select,
            &query.pagination,
            |m| m.into_school_year(),
            "list school years",
        )
        .await
    }

    async fn update_school_year(
        &self,
        id: i64,
        update: UpdateSchoolYearRequest,
    ) -> Result<Option<SchoolYear>> {
        let Some(existing) = self.get_school_year_by_id(id).await? else {
            return Ok(None);
        };

        // 只改一端时与原值合并后再校验
        let start_date = update.start_date.unwrap_or(existing.start_date);
        let end_date = update.end_date.unwrap_or(existing.end_date);
        check_date_order(start_date, end_date)?;

        let txn = self.db.begin().await.map_err(db_err("update school year"))?;

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if update.start_date.is_some() {
            model.start_date = Set(start_date);
        }
        if update.end_date.is_some() {
            model.end_date = Set(end_date);
        }
        if let Some(is_active) = update.is_active {
            if is_active {
                deactivate_others(&txn, Some(id))
                    .await
                    .map_err(db_err("deactivate school years"))?;
            }
            model.is_active = Set(is_active);
        }

        model.update(&txn).await.map_err(db_err("update school year"))?;
        txn.commit().await.map_err(db_err("update school year"))?;

        self.get_school_year_by_id(id).await
    }

    async fn delete_school_year(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("delete school year"))?;

        classes::Entity::update_many()
            .col_expr(
                classes::Column::SchoolYearId,
                Expr::value(Option::<i64>::None),
            )
            .filter(classes::Column::SchoolYearId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("detach classes"))?;

        let result = SchoolYears::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err("delete school year"))?;

        txn.commit().await.map_err(db_err("delete school year"))?;
        Ok(result.rows_affected > 0)
    }
}
