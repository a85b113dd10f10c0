use super::{SeaOrmStorage, now_ts, purge_assessments};
use crate::entity::assessments::{ActiveModel, Column, Entity as Assessments};
use crate::errors::{Result, db_err};
use crate::models::{
    PaginatedResponse,
    assessments::{
        entities::Assessment,
        requests::{AssessmentListParams, CreateAssessmentRequest, UpdateAssessmentRequest},
    },
};
use crate::storage::AssessmentStorage;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

#[async_trait::async_trait]
impl AssessmentStorage for SeaOrmStorage {
    async fn create_assessment(&self, req: CreateAssessmentRequest) -> Result<Assessment> {
        let now = now_ts();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            subject_id: Set(req.subject_id),
            name: Set(req.name),
            kind: Set(req.kind),
            date: Set(req.date),
            max_score: Set(req.max_score),
            weight: Set(req.weight),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("create assessment"))?;

        Ok(result.into_assessment())
    }

    async fn get_assessment_by_id(&self, id: i64) -> Result<Option<Assessment>> {
        let result = Assessments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("query assessment"))?;

        Ok(result.map(|m| m.into_assessment()))
    }

    async fn list_assessments_with_pagination(
        &self,
        query: AssessmentListParams,
    ) -> Result<PaginatedResponse<Assessment>> {
        let mut select = Assessments::find();

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        select = select.order_by_desc(Column::Date).order_by_asc(Column::Name);

        self.fetch_page(
            select,
            &query.pagination,
            |m| m.into_assessment(),
            "list assessments",
        )
        .await
    }

    async fn update_assessment(
        &self,
        id: i64,
        update: UpdateAssessmentRequest,
    ) -> Result<Option<Assessment>> {
        if self.get_assessment_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now_ts()),
            ..Default::default()
        };

        if let Some(class_id) = update.class_id {
            model.class_id = Set(class_id);
        }
        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(kind) = update.kind {
            model.kind = Set(kind);
        }
        if let Some(date) = update.date {
            model.date = Set(date);
        }
        if let Some(max_score) = update.max_score {
            model.max_score = Set(max_score);
        }
        if let Some(weight) = update.weight {
            model.weight = Set(weight);
        }

        model.update(&self.db).await.map_err(db_err("update assessment"))?;

        self.get_assessment_by_id(id).await
    }

    async fn delete_assessment(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("delete assessment"))?;

        let deleted = purge_assessments(&txn, Condition::all().add(Column::Id.eq(id)))
            .await
            .map_err(db_err("delete assessment"))?;

        txn.commit().await.map_err(db_err("delete assessment"))?;
        Ok(deleted > 0)
    }
}
