use super::{SeaOrmStorage, now_ts, purge_rosters, search_term};
use crate::entity::classrooms::{ActiveModel, Column, Entity as Classrooms};
use crate::entity::rosters;
use crate::errors::{Result, db_err};
use crate::models::{
    PaginatedResponse,
    classrooms::{
        entities::Classroom,
        requests::{ClassroomListParams, CreateClassroomRequest, UpdateClassroomRequest},
    },
};
use crate::storage::ClassroomStorage;
use crate::utils::sql::contains_any;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

#[async_trait::async_trait]
impl ClassroomStorage for SeaOrmStorage {
    async fn create_classroom(&self, req: CreateClassroomRequest) -> Result<Classroom> {
        let now = now_ts();

        let model = ActiveModel {
            name: Set(req.name),
            capacity: Set(req.capacity),
            location: Set(req.location),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("create classroom"))?;

        Ok(result.into_classroom())
    }

    async fn get_classroom_by_id(&self, id: i64) -> Result<Option<Classroom>> {
        let result = Classrooms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query classroom"))?;

        Ok(result.map(|m| m.into_classroom()))
    }

    async fn list_classrooms_with_pagination(
        &self,
        query: ClassroomListParams,
    ) -> Result<PaginatedResponse<Classroom>> {
        let mut select = Classrooms::find();

        if let Some(term) = search_term(&query.search) {
            select = select.filter(contains_any(&[Column::Name, Column::Location], &term));
        }

        select = select.order_by_asc(Column::Name);

        self.fetch_page(
            select,
            &query.pagination,
            |m| m.into_classroom(),
            "list classrooms",
        )
        .await
    }

    async fn update_classroom(
        &self,
        id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>> {
        if self.get_classroom_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(capacity) = update.capacity {
            model.capacity = Set(Some(capacity));
        }
        if let Some(location) = update.location {
            model.location = Set(Some(location));
        }

        model.update(&self.db).await.map_err(db_err("update classroom"))?;

        self.get_classroom_by_id(id).await
    }

    async fn delete_classroom(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("delete classroom"))?;

        purge_rosters(&txn, Condition::all().add(rosters::Column::ClassroomId.eq(id)))
            .await
            .map_err(db_err("delete classroom rosters"))?;

        let result = Classrooms::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err("delete classroom"))?;

        txn.commit().await.map_err(db_err("delete classroom"))?;
        Ok(result.rows_affected > 0)
    }
}
